//! Demo dataset for the in-memory store

use super::memory::InMemoryStore;
use crate::state::{
    BusinessProfile, Lead, LeadPriority, LeadStatus, Order, OrderStatus, Payment, PaymentKind,
    PaymentStatus, ProfileStatus, Quote, QuoteStatus, RegisteredAddress, SupportTicket,
    TicketStatus,
};
use chrono::{DateTime, Duration, Utc};

fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// Build the seeded demo store
pub fn sample_store() -> InMemoryStore {
    let profiles = vec![
        BusinessProfile {
            id: "prof-1".to_string(),
            company_name: "Bhiwandi Weaves Pvt Ltd".to_string(),
            contact_person: "A. Khan".to_string(),
            phone: "9820011223".to_string(),
            email: "orders@bhiwandiweaves.in".to_string(),
            gstin: "27AAACB1234F1Z8".to_string(),
            pan: "AAACB1234F".to_string(),
            secondary_gstin: None,
            address: RegisteredAddress {
                street: "Plot 12, Powerloom Estate".to_string(),
                city: "Bhiwandi".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "421302".to_string(),
            },
            status: ProfileStatus::Active,
            credit_limit: 800_000.0,
            payment_terms: "50% advance, balance on delivery".to_string(),
            total_orders: 4,
            total_business_value: 1_850_000.0,
            created_at: days_ago(540),
        },
        BusinessProfile {
            id: "prof-2".to_string(),
            company_name: "Erode Cotton Traders".to_string(),
            contact_person: "S. Palanisamy".to_string(),
            phone: "9944556677".to_string(),
            email: "buy@erodecotton.co.in".to_string(),
            gstin: "33AABCE5678K1Z2".to_string(),
            pan: "AABCE5678K".to_string(),
            secondary_gstin: Some("29AABCE5678K1Z6".to_string()),
            address: RegisteredAddress {
                street: "41 Gandhiji Road".to_string(),
                city: "Erode".to_string(),
                state: "Tamil Nadu".to_string(),
                pincode: "638001".to_string(),
            },
            status: ProfileStatus::Active,
            credit_limit: 500_000.0,
            payment_terms: "30 days credit".to_string(),
            total_orders: 2,
            total_business_value: 620_000.0,
            created_at: days_ago(300),
        },
    ];

    let leads = vec![
        Lead {
            id: "lead-1".to_string(),
            company_name: "Panipat Handloom House".to_string(),
            contact_person: "V. Arora".to_string(),
            phone: "9812345678".to_string(),
            city: "Panipat".to_string(),
            fabric_interest: "recycled yarn blankets".to_string(),
            priority: LeadPriority::Hot,
            status: LeadStatus::QuoteSent,
            business_profile_id: None,
            created_at: days_ago(12),
        },
        Lead {
            id: "lead-2".to_string(),
            company_name: "Tirupur Knit Exports".to_string(),
            contact_person: "K. Murugan".to_string(),
            phone: "9876501234".to_string(),
            city: "Tirupur".to_string(),
            fabric_interest: "organic cotton jersey".to_string(),
            priority: LeadPriority::Hot,
            status: LeadStatus::Contacted,
            business_profile_id: None,
            created_at: days_ago(8),
        },
        Lead {
            id: "lead-3".to_string(),
            company_name: "Jaipur Block Prints".to_string(),
            contact_person: "M. Sharma".to_string(),
            phone: "9829912345".to_string(),
            city: "Jaipur".to_string(),
            fabric_interest: "printed voile".to_string(),
            priority: LeadPriority::Warm,
            status: LeadStatus::New,
            business_profile_id: None,
            created_at: days_ago(4),
        },
        Lead {
            id: "lead-4".to_string(),
            company_name: "Ludhiana Wool Mart".to_string(),
            contact_person: "H. Gill".to_string(),
            phone: "9855544332".to_string(),
            city: "Ludhiana".to_string(),
            fabric_interest: "acrylic knits".to_string(),
            priority: LeadPriority::Cold,
            status: LeadStatus::Lost,
            business_profile_id: None,
            created_at: days_ago(60),
        },
    ];

    let quotes = vec![
        Quote {
            id: "quote-1".to_string(),
            lead_id: "lead-1".to_string(),
            amount: 420_000.0,
            status: QuoteStatus::Sent,
            created_at: days_ago(10),
        },
        Quote {
            id: "quote-2".to_string(),
            lead_id: "lead-2".to_string(),
            amount: 260_000.0,
            status: QuoteStatus::Draft,
            created_at: days_ago(2),
        },
    ];

    let orders = vec![
        Order {
            id: "ord-1".to_string(),
            profile_id: "prof-1".to_string(),
            fabric: "cotton voile 60s".to_string(),
            quantity_meters: 8_000.0,
            total_amount: 560_000.0,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Verified,
            order_date: days_ago(400),
        },
        Order {
            id: "ord-2".to_string(),
            profile_id: "prof-1".to_string(),
            fabric: "rayon challis".to_string(),
            quantity_meters: 5_500.0,
            total_amount: 390_000.0,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Received,
            order_date: days_ago(180),
        },
        Order {
            id: "ord-3".to_string(),
            profile_id: "prof-1".to_string(),
            fabric: "polyester georgette".to_string(),
            quantity_meters: 12_000.0,
            total_amount: 900_000.0,
            status: OrderStatus::InProduction,
            payment_status: PaymentStatus::Pending,
            order_date: days_ago(20),
        },
        Order {
            id: "ord-4".to_string(),
            profile_id: "prof-2".to_string(),
            fabric: "combed cotton 40s".to_string(),
            quantity_meters: 4_200.0,
            total_amount: 320_000.0,
            status: OrderStatus::Shipped,
            payment_status: PaymentStatus::Overdue,
            order_date: days_ago(35),
        },
        Order {
            id: "ord-5".to_string(),
            profile_id: "prof-2".to_string(),
            fabric: "slub cotton".to_string(),
            quantity_meters: 3_800.0,
            total_amount: 300_000.0,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Verified,
            order_date: days_ago(150),
        },
    ];

    let payments = vec![
        Payment {
            id: "pay-1".to_string(),
            order_id: "ord-1".to_string(),
            profile_id: "prof-1".to_string(),
            kind: PaymentKind::Advance,
            amount: 280_000.0,
            status: PaymentStatus::Verified,
            paid_on: days_ago(395),
        },
        Payment {
            id: "pay-2".to_string(),
            order_id: "ord-1".to_string(),
            profile_id: "prof-1".to_string(),
            kind: PaymentKind::Final,
            amount: 280_000.0,
            status: PaymentStatus::Verified,
            paid_on: days_ago(360),
        },
        Payment {
            id: "pay-3".to_string(),
            order_id: "ord-2".to_string(),
            profile_id: "prof-1".to_string(),
            kind: PaymentKind::Advance,
            amount: 195_000.0,
            status: PaymentStatus::Received,
            paid_on: days_ago(178),
        },
        Payment {
            id: "pay-4".to_string(),
            order_id: "ord-2".to_string(),
            profile_id: "prof-1".to_string(),
            kind: PaymentKind::Final,
            amount: 195_000.0,
            status: PaymentStatus::Received,
            paid_on: days_ago(140),
        },
        Payment {
            id: "pay-5".to_string(),
            order_id: "ord-3".to_string(),
            profile_id: "prof-1".to_string(),
            kind: PaymentKind::Advance,
            amount: 450_000.0,
            status: PaymentStatus::Pending,
            paid_on: days_ago(18),
        },
        Payment {
            id: "pay-6".to_string(),
            order_id: "ord-4".to_string(),
            profile_id: "prof-2".to_string(),
            kind: PaymentKind::Advance,
            amount: 160_000.0,
            status: PaymentStatus::Overdue,
            paid_on: days_ago(30),
        },
        Payment {
            id: "pay-7".to_string(),
            order_id: "ord-5".to_string(),
            profile_id: "prof-2".to_string(),
            kind: PaymentKind::Advance,
            amount: 150_000.0,
            status: PaymentStatus::Verified,
            paid_on: days_ago(148),
        },
        Payment {
            id: "pay-8".to_string(),
            order_id: "ord-5".to_string(),
            profile_id: "prof-2".to_string(),
            kind: PaymentKind::Final,
            amount: 150_000.0,
            status: PaymentStatus::Verified,
            paid_on: days_ago(110),
        },
    ];

    let tickets = vec![
        SupportTicket {
            id: "tick-1".to_string(),
            profile_id: Some("prof-1".to_string()),
            order_id: Some("ord-2".to_string()),
            subject: "Short delivery on rayon challis".to_string(),
            description: "Received 5,350 m against invoiced 5,500 m.".to_string(),
            category: "delivery".to_string(),
            priority: 1,
            status: TicketStatus::InProgress,
            created_at: days_ago(30),
            updated_at: days_ago(25),
        },
        SupportTicket {
            id: "tick-2".to_string(),
            profile_id: Some("prof-2".to_string()),
            order_id: None,
            subject: "GST invoice correction".to_string(),
            description: "Branch GSTIN missing on last two invoices.".to_string(),
            category: "billing".to_string(),
            priority: 2,
            status: TicketStatus::Open,
            created_at: days_ago(6),
            updated_at: days_ago(6),
        },
    ];

    InMemoryStore::new(leads, quotes, orders, payments, profiles, tickets)
}
