//! Derived business metrics
//!
//! Pure reducers over the shared collections. Snapshots are recomputed on
//! every render and never stored; none of these functions mutate their
//! inputs.

use crate::state::{
    BusinessProfile, Lead, LeadPriority, LeadStatus, Order, OrderStatus, Payment, PaymentStatus,
    Quote, QuoteStatus,
};
use chrono::{DateTime, Datelike, Utc};

/// Computed metrics for one customer
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInsights {
    pub total_order_value: f64,
    pub total_paid: f64,
    pub outstanding: f64,
    pub active_orders: usize,
    pub completed_orders: usize,
    pub average_order_value: f64,
    pub payment_reliability_pct: f64,
    pub yoy_growth_pct: f64,
    pub average_days_between_orders: f64,
    pub credit_utilization_pct: f64,
}

/// Credit risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low risk",
            Self::Medium => "medium risk",
            Self::High => "high risk",
        }
    }
}

/// Year-over-year growth band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthTrend {
    HighGrowth,
    Growing,
    Stable,
    Declining,
}

impl GrowthTrend {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighGrowth => "high growth",
            Self::Growing => "growing",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

/// Compute the insight snapshot for one customer.
///
/// `now` anchors the calendar-year buckets so the result is deterministic
/// for a given input set.
pub fn compute_customer_insights(
    orders: &[Order],
    advance_payments: &[Payment],
    final_payments: &[Payment],
    credit_limit: f64,
    now: DateTime<Utc>,
) -> CustomerInsights {
    let billable: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .collect();

    let total_order_value: f64 = billable.iter().map(|o| o.total_amount).sum();
    let total_paid: f64 = advance_payments
        .iter()
        .chain(final_payments.iter())
        .filter(|p| p.status.is_settled())
        .map(|p| p.amount)
        .sum();
    let outstanding = total_order_value - total_paid;

    let active_orders = orders.iter().filter(|o| o.status.is_active()).count();
    let completed_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .count();

    let average_order_value = if billable.is_empty() {
        0.0
    } else {
        total_order_value / billable.len() as f64
    };

    let total_payments = advance_payments.len() + final_payments.len();
    let settled_payments = advance_payments
        .iter()
        .chain(final_payments.iter())
        .filter(|p| p.status.is_settled())
        .count();
    let payment_reliability_pct = if total_payments == 0 {
        0.0
    } else {
        settled_payments as f64 / total_payments as f64 * 100.0
    };

    let this_year = now.year();
    let value_in_year = |year: i32| -> f64 {
        billable
            .iter()
            .filter(|o| o.order_date.year() == year)
            .map(|o| o.total_amount)
            .sum()
    };
    let current_year_value = value_in_year(this_year);
    let prior_year_value = value_in_year(this_year - 1);
    let yoy_growth_pct = if prior_year_value == 0.0 {
        0.0
    } else {
        (current_year_value - prior_year_value) / prior_year_value * 100.0
    };

    let mut dates: Vec<DateTime<Utc>> = orders.iter().map(|o| o.order_date).collect();
    dates.sort();
    let average_days_between_orders = if dates.len() < 2 {
        0.0
    } else {
        let total_days: f64 = dates
            .windows(2)
            .map(|w| (w[1] - w[0]).num_seconds() as f64 / 86_400.0)
            .sum();
        total_days / (dates.len() - 1) as f64
    };

    let credit_utilization_pct = if credit_limit == 0.0 {
        0.0
    } else {
        outstanding / credit_limit * 100.0
    };

    CustomerInsights {
        total_order_value,
        total_paid,
        outstanding,
        active_orders,
        completed_orders,
        average_order_value,
        payment_reliability_pct,
        yoy_growth_pct,
        average_days_between_orders,
        credit_utilization_pct,
    }
}

/// Ordered tier checks; the first matching tier wins
pub fn classify_risk(insights: &CustomerInsights) -> RiskTier {
    if insights.payment_reliability_pct >= 90.0
        && insights.credit_utilization_pct <= 50.0
        && insights.outstanding <= 100_000.0
    {
        RiskTier::Low
    } else if insights.payment_reliability_pct >= 70.0
        && insights.credit_utilization_pct <= 80.0
        && insights.outstanding <= 500_000.0
    {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

pub fn classify_growth(yoy_growth_pct: f64) -> GrowthTrend {
    if yoy_growth_pct > 20.0 {
        GrowthTrend::HighGrowth
    } else if yoy_growth_pct > 0.0 {
        GrowthTrend::Growing
    } else if yoy_growth_pct >= -10.0 {
        GrowthTrend::Stable
    } else {
        GrowthTrend::Declining
    }
}

/// Rule-derived follow-up suggestions for one customer
pub fn recommendations(insights: &CustomerInsights, risk: RiskTier) -> Vec<String> {
    let mut out = Vec::new();
    if risk == RiskTier::High {
        out.push("Collect outstanding dues before accepting new orders".to_string());
    }
    if insights.credit_utilization_pct > 80.0 {
        out.push("Credit limit nearly exhausted; review before next quote".to_string());
    }
    if insights.payment_reliability_pct < 70.0 && insights.total_paid > 0.0 {
        out.push("Move to advance-only payment terms".to_string());
    }
    if classify_growth(insights.yoy_growth_pct) == GrowthTrend::HighGrowth {
        out.push("Order value growing fast; offer volume pricing".to_string());
    }
    if insights.active_orders == 0 && insights.completed_orders > 0 {
        out.push("No orders in progress; schedule a follow-up call".to_string());
    }
    out
}

/// Aggregate metrics for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_leads: usize,
    pub hot_leads: usize,
    pub warm_leads: usize,
    pub cold_leads: usize,
    pub converted_leads: usize,
    pub total_quotes: usize,
    pub quotes_sent: usize,
    pub quotes_accepted: usize,
    pub total_orders: usize,
    pub active_orders: usize,
    pub delivered_orders: usize,
    pub payments_pending: usize,
    pub payments_overdue: usize,
    pub total_customers: usize,
    pub total_order_value: f64,
    /// Orders per lead, percentage, rounded to the nearest whole number
    pub conversion_rate_pct: f64,
}

pub fn compute_dashboard_summary(
    leads: &[Lead],
    quotes: &[Quote],
    orders: &[Order],
    profiles: &[BusinessProfile],
) -> DashboardSummary {
    let by_priority = |p: LeadPriority| leads.iter().filter(|l| l.priority == p).count();

    let conversion_rate_pct = if leads.is_empty() {
        0.0
    } else {
        (orders.len() as f64 / leads.len() as f64 * 100.0).round()
    };

    DashboardSummary {
        total_leads: leads.len(),
        hot_leads: by_priority(LeadPriority::Hot),
        warm_leads: by_priority(LeadPriority::Warm),
        cold_leads: by_priority(LeadPriority::Cold),
        converted_leads: leads
            .iter()
            .filter(|l| l.status == LeadStatus::Converted)
            .count(),
        total_quotes: quotes.len(),
        quotes_sent: quotes
            .iter()
            .filter(|q| q.status == QuoteStatus::Sent)
            .count(),
        quotes_accepted: quotes
            .iter()
            .filter(|q| q.status == QuoteStatus::Accepted)
            .count(),
        total_orders: orders.len(),
        active_orders: orders.iter().filter(|o| o.status.is_active()).count(),
        delivered_orders: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .count(),
        payments_pending: orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Pending)
            .count(),
        payments_overdue: orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Overdue)
            .count(),
        total_customers: profiles.len(),
        total_order_value: orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total_amount)
            .sum(),
        conversion_rate_pct,
    }
}

/// Abbreviated rupee formatting: crore / lakh / thousand tiers,
/// one decimal place each; small values shown literally.
pub fn format_inr(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("₹{:.1} Cr", amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("₹{:.1} L", amount / 100_000.0)
    } else if amount >= 1_000.0 {
        format!("₹{:.1} K", amount / 1_000.0)
    } else {
        format!("₹{amount:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PaymentKind, ProfileStatus, RegisteredAddress};
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn order(amount: f64, status: OrderStatus, ordered: DateTime<Utc>) -> Order {
        Order {
            id: format!("ord-{amount}-{ordered}"),
            profile_id: "prof-1".to_string(),
            fabric: "cotton voile".to_string(),
            quantity_meters: 1000.0,
            total_amount: amount,
            status,
            payment_status: PaymentStatus::Pending,
            order_date: ordered,
        }
    }

    fn payment(amount: f64, kind: PaymentKind, status: PaymentStatus) -> Payment {
        Payment {
            id: format!("pay-{amount}"),
            order_id: "ord-1".to_string(),
            profile_id: "prof-1".to_string(),
            kind,
            amount,
            status,
            paid_on: date(2026, 3, 1),
        }
    }

    fn lead(priority: LeadPriority, status: LeadStatus) -> Lead {
        Lead {
            id: "lead-1".to_string(),
            company_name: "Surat Silk House".to_string(),
            contact_person: "R. Mehta".to_string(),
            phone: "9876543210".to_string(),
            city: "Surat".to_string(),
            fabric_interest: "silk".to_string(),
            priority,
            status,
            business_profile_id: None,
            created_at: date(2026, 1, 5),
        }
    }

    fn profile() -> BusinessProfile {
        BusinessProfile {
            id: "prof-1".to_string(),
            company_name: "Surat Silk House".to_string(),
            contact_person: "R. Mehta".to_string(),
            phone: "9876543210".to_string(),
            email: "sales@suratsilk.in".to_string(),
            gstin: "24ABCDE1234F1Z5".to_string(),
            pan: "ABCDE1234F".to_string(),
            secondary_gstin: None,
            address: RegisteredAddress::default(),
            status: ProfileStatus::Active,
            credit_limit: 500_000.0,
            payment_terms: "50% advance, balance on delivery".to_string(),
            total_orders: 0,
            total_business_value: 0.0,
            created_at: date(2025, 6, 1),
        }
    }

    const NOW: fn() -> DateTime<Utc> = || date(2026, 8, 23);

    mod customer_insights {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_inputs_guard_against_division_by_zero() {
            let insights = compute_customer_insights(&[], &[], &[], 0.0, NOW());
            assert_eq!(insights.average_order_value, 0.0);
            assert_eq!(insights.credit_utilization_pct, 0.0);
            assert_eq!(insights.payment_reliability_pct, 0.0);
            assert_eq!(insights.yoy_growth_pct, 0.0);
            assert_eq!(insights.average_days_between_orders, 0.0);
        }

        #[test]
        fn test_recompute_with_same_inputs_is_identical() {
            let orders = vec![
                order(200_000.0, OrderStatus::Delivered, date(2026, 2, 1)),
                order(300_000.0, OrderStatus::InProduction, date(2026, 5, 1)),
            ];
            let adv = vec![payment(100_000.0, PaymentKind::Advance, PaymentStatus::Verified)];
            let fin = vec![payment(100_000.0, PaymentKind::Final, PaymentStatus::Received)];

            let a = compute_customer_insights(&orders, &adv, &fin, 500_000.0, NOW());
            let b = compute_customer_insights(&orders, &adv, &fin, 500_000.0, NOW());
            assert_eq!(a, b);
        }

        #[test]
        fn test_inputs_not_mutated() {
            let orders = vec![
                order(300_000.0, OrderStatus::Delivered, date(2026, 5, 1)),
                order(200_000.0, OrderStatus::Delivered, date(2026, 2, 1)),
            ];
            let before = orders.clone();
            let _ = compute_customer_insights(&orders, &[], &[], 500_000.0, NOW());
            // date sorting happens on a copy
            assert_eq!(orders[0].order_date, before[0].order_date);
            assert_eq!(orders[1].order_date, before[1].order_date);
        }

        #[test]
        fn test_totals_and_outstanding() {
            let orders = vec![
                order(500_000.0, OrderStatus::Delivered, date(2026, 2, 1)),
                order(100_000.0, OrderStatus::Cancelled, date(2026, 3, 1)),
            ];
            let adv = vec![payment(250_000.0, PaymentKind::Advance, PaymentStatus::Verified)];
            let fin = vec![payment(250_000.0, PaymentKind::Final, PaymentStatus::Received)];

            let insights = compute_customer_insights(&orders, &adv, &fin, 500_000.0, NOW());
            // cancelled order excluded from value sums
            assert_eq!(insights.total_order_value, 500_000.0);
            assert_eq!(insights.total_paid, 500_000.0);
            assert_eq!(insights.outstanding, 0.0);
            assert_eq!(insights.average_order_value, 500_000.0);
        }

        #[test]
        fn test_active_and_completed_counts() {
            let orders = vec![
                order(1.0, OrderStatus::Confirmed, date(2026, 1, 1)),
                order(1.0, OrderStatus::InProduction, date(2026, 2, 1)),
                order(1.0, OrderStatus::Shipped, date(2026, 3, 1)),
                order(1.0, OrderStatus::Delivered, date(2026, 4, 1)),
                order(1.0, OrderStatus::Cancelled, date(2026, 5, 1)),
            ];
            let insights = compute_customer_insights(&orders, &[], &[], 0.0, NOW());
            assert_eq!(insights.active_orders, 3);
            assert_eq!(insights.completed_orders, 1);
        }

        #[test]
        fn test_payment_reliability_counts_settled_only() {
            let adv = vec![
                payment(1.0, PaymentKind::Advance, PaymentStatus::Verified),
                payment(1.0, PaymentKind::Advance, PaymentStatus::Pending),
            ];
            let fin = vec![
                payment(1.0, PaymentKind::Final, PaymentStatus::Received),
                payment(1.0, PaymentKind::Final, PaymentStatus::Overdue),
            ];
            let insights = compute_customer_insights(&[], &adv, &fin, 0.0, NOW());
            assert_eq!(insights.payment_reliability_pct, 50.0);
        }

        #[test]
        fn test_yoy_growth_against_prior_calendar_year() {
            let orders = vec![
                order(100_000.0, OrderStatus::Delivered, date(2025, 6, 1)),
                order(150_000.0, OrderStatus::Delivered, date(2026, 6, 1)),
            ];
            let insights = compute_customer_insights(&orders, &[], &[], 0.0, NOW());
            assert!((insights.yoy_growth_pct - 50.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_yoy_growth_zero_without_baseline() {
            let orders = vec![order(150_000.0, OrderStatus::Delivered, date(2026, 6, 1))];
            let insights = compute_customer_insights(&orders, &[], &[], 0.0, NOW());
            assert_eq!(insights.yoy_growth_pct, 0.0);
        }

        #[test]
        fn test_average_days_between_orders_sorts_first() {
            // supplied out of order: 1 Mar, 1 Jan, 31 Jan
            let orders = vec![
                order(1.0, OrderStatus::Delivered, date(2026, 3, 2)),
                order(1.0, OrderStatus::Delivered, date(2026, 1, 1)),
                order(1.0, OrderStatus::Delivered, date(2026, 1, 31)),
            ];
            let insights = compute_customer_insights(&orders, &[], &[], 0.0, NOW());
            // gaps of 30 days each
            assert!((insights.average_days_between_orders - 30.0).abs() < 0.01);
        }

        #[test]
        fn test_single_order_has_zero_cadence() {
            let orders = vec![order(1.0, OrderStatus::Delivered, date(2026, 1, 1))];
            let insights = compute_customer_insights(&orders, &[], &[], 0.0, NOW());
            assert_eq!(insights.average_days_between_orders, 0.0);
        }
    }

    mod risk_and_growth {
        use super::*;
        use pretty_assertions::assert_eq;

        fn insights(reliability: f64, utilization: f64, outstanding: f64) -> CustomerInsights {
            CustomerInsights {
                total_order_value: 0.0,
                total_paid: 0.0,
                outstanding,
                active_orders: 0,
                completed_orders: 0,
                average_order_value: 0.0,
                payment_reliability_pct: reliability,
                yoy_growth_pct: 0.0,
                average_days_between_orders: 0.0,
                credit_utilization_pct: utilization,
            }
        }

        #[test]
        fn test_fully_paid_customer_is_low_risk() {
            let orders = vec![order(500_000.0, OrderStatus::Delivered, date(2026, 2, 1))];
            let adv = vec![payment(250_000.0, PaymentKind::Advance, PaymentStatus::Verified)];
            let fin = vec![payment(250_000.0, PaymentKind::Final, PaymentStatus::Verified)];

            let computed = compute_customer_insights(&orders, &adv, &fin, 500_000.0, NOW());
            assert_eq!(computed.outstanding, 0.0);
            assert_eq!(computed.payment_reliability_pct, 100.0);
            assert_eq!(computed.credit_utilization_pct, 0.0);
            assert_eq!(classify_risk(&computed), RiskTier::Low);
        }

        #[test]
        fn test_risk_tiers_are_ordered_checks() {
            assert_eq!(classify_risk(&insights(95.0, 40.0, 50_000.0)), RiskTier::Low);
            // reliability too low for Low, fits Medium
            assert_eq!(
                classify_risk(&insights(75.0, 40.0, 50_000.0)),
                RiskTier::Medium
            );
            // outstanding over the Medium cap falls through to High
            assert_eq!(
                classify_risk(&insights(95.0, 40.0, 600_000.0)),
                RiskTier::High
            );
            assert_eq!(
                classify_risk(&insights(60.0, 90.0, 900_000.0)),
                RiskTier::High
            );
        }

        #[test]
        fn test_growth_bands() {
            assert_eq!(classify_growth(35.0), GrowthTrend::HighGrowth);
            assert_eq!(classify_growth(20.0), GrowthTrend::Growing);
            assert_eq!(classify_growth(0.5), GrowthTrend::Growing);
            assert_eq!(classify_growth(0.0), GrowthTrend::Stable);
            // declining starts strictly below -10
            assert_eq!(classify_growth(-10.0), GrowthTrend::Stable);
            assert_eq!(classify_growth(-10.01), GrowthTrend::Declining);
            assert_eq!(classify_growth(-25.0), GrowthTrend::Declining);
        }

        #[test]
        fn test_recommendations_are_deterministic_rules() {
            let i = insights(50.0, 90.0, 700_000.0);
            let first = recommendations(&i, classify_risk(&i));
            let second = recommendations(&i, classify_risk(&i));
            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }

    mod dashboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_summary_counts_by_tier_and_status() {
            let leads = vec![
                lead(LeadPriority::Hot, LeadStatus::New),
                lead(LeadPriority::Hot, LeadStatus::Converted),
                lead(LeadPriority::Warm, LeadStatus::Contacted),
                lead(LeadPriority::Cold, LeadStatus::Lost),
            ];
            let quotes = vec![Quote {
                id: "q-1".to_string(),
                lead_id: "lead-1".to_string(),
                amount: 200_000.0,
                status: QuoteStatus::Sent,
                created_at: date(2026, 1, 10),
            }];
            let orders = vec![
                order(200_000.0, OrderStatus::InProduction, date(2026, 2, 1)),
                order(300_000.0, OrderStatus::Delivered, date(2026, 3, 1)),
            ];
            let profiles = vec![profile()];

            let summary = compute_dashboard_summary(&leads, &quotes, &orders, &profiles);
            assert_eq!(summary.total_leads, 4);
            assert_eq!(summary.hot_leads, 2);
            assert_eq!(summary.warm_leads, 1);
            assert_eq!(summary.cold_leads, 1);
            assert_eq!(summary.converted_leads, 1);
            assert_eq!(summary.quotes_sent, 1);
            assert_eq!(summary.total_orders, 2);
            assert_eq!(summary.active_orders, 1);
            assert_eq!(summary.delivered_orders, 1);
            assert_eq!(summary.total_customers, 1);
            assert_eq!(summary.total_order_value, 500_000.0);
            assert_eq!(summary.conversion_rate_pct, 50.0);
        }

        #[test]
        fn test_conversion_rate_guarded_for_zero_leads() {
            let summary = compute_dashboard_summary(&[], &[], &[], &[]);
            assert_eq!(summary.conversion_rate_pct, 0.0);
        }
    }

    mod currency {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_format_inr_tiers() {
            assert_eq!(format_inr(25_000_000.0), "₹2.5 Cr");
            assert_eq!(format_inr(10_000_000.0), "₹1.0 Cr");
            assert_eq!(format_inr(250_000.0), "₹2.5 L");
            assert_eq!(format_inr(100_000.0), "₹1.0 L");
            assert_eq!(format_inr(2_500.0), "₹2.5 K");
            assert_eq!(format_inr(999.0), "₹999");
            assert_eq!(format_inr(0.0), "₹0");
        }
    }
}
