//! Domain records shared by the store and the views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Credit limit assigned to newly converted customers
pub const DEFAULT_CREDIT_LIMIT: f64 = 500_000.0;
/// Payment terms assigned to newly converted customers
pub const DEFAULT_PAYMENT_TERMS: &str = "50% advance, balance on delivery";

/// Sales priority of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadPriority {
    Hot,
    Warm,
    Cold,
}

impl LeadPriority {
    /// Sort rank; hottest first under ascending order
    pub fn rank(&self) -> u8 {
        match self {
            Self::Hot => 0,
            Self::Warm => 1,
            Self::Cold => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }
}

/// Pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    QuoteSent,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::QuoteSent => "quote sent",
            Self::Converted => "converted",
            Self::Lost => "lost",
        }
    }
}

/// Sales lead, not yet a full customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    pub city: String,
    pub fabric_interest: String,
    pub priority: LeadPriority,
    pub status: LeadStatus,
    /// Set once the lead is converted into a business profile
    pub business_profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
}

impl QuoteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub lead_id: String,
    pub amount: f64,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

/// Production stage of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Confirmed,
    InProduction,
    QualityCheck,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Still in the pipeline: confirmed through shipped
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::Confirmed | Self::InProduction | Self::QualityCheck | Self::Shipped
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::InProduction => "in production",
            Self::QualityCheck => "quality check",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Received,
    Verified,
    Overdue,
}

impl PaymentStatus {
    /// Money has actually arrived
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Received | Self::Verified)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Received => "received",
            Self::Verified => "verified",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub profile_id: String,
    pub fabric: String,
    pub quantity_meters: f64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub order_date: DateTime<Utc>,
}

/// Whether a payment is the advance or the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    Advance,
    Final,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub profile_id: String,
    pub kind: PaymentKind,
    pub amount: f64,
    pub status: PaymentStatus,
    pub paid_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileStatus {
    Prospect,
    Active,
    Dormant,
}

impl ProfileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::Active => "active",
            Self::Dormant => "dormant",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisteredAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Full customer record, created by converting a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub gstin: String,
    pub pan: String,
    /// Branch registration, where the customer operates a second state
    pub secondary_gstin: Option<String>,
    pub address: RegisteredAddress,
    pub status: ProfileStatus,
    pub credit_limit: f64,
    pub payment_terms: String,
    pub total_orders: usize,
    pub total_business_value: f64,
    pub created_at: DateTime<Utc>,
}

fn field<'a>(fields: &'a BTreeMap<String, String>, path: &str) -> &'a str {
    fields.get(path).map(String::as_str).unwrap_or("").trim()
}

impl BusinessProfile {
    /// Build a fresh profile from accumulated wizard fields.
    /// Counters start at zero; commercial terms get the defaults.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let secondary = field(fields, "secondary_gstin");
        Self {
            id: Uuid::new_v4().to_string(),
            company_name: field(fields, "company_name").to_string(),
            contact_person: field(fields, "contact_person").to_string(),
            phone: field(fields, "phone").to_string(),
            email: field(fields, "email").to_string(),
            gstin: field(fields, "gstin").to_string(),
            pan: field(fields, "pan").to_string(),
            secondary_gstin: (!secondary.is_empty()).then(|| secondary.to_string()),
            address: RegisteredAddress {
                street: field(fields, "registered_address.street").to_string(),
                city: field(fields, "registered_address.city").to_string(),
                state: field(fields, "registered_address.state").to_string(),
                pincode: field(fields, "registered_address.pincode").to_string(),
            },
            status: ProfileStatus::Prospect,
            credit_limit: DEFAULT_CREDIT_LIMIT,
            payment_terms: DEFAULT_PAYMENT_TERMS.to_string(),
            total_orders: 0,
            total_business_value: 0.0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub profile_id: Option<String>,
    pub order_id: Option<String>,
    pub subject: String,
    pub description: String,
    pub category: String,
    /// 1 = high, 2 = medium, 3 = low
    pub priority: u8,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportTicket {
    /// Build a fresh ticket from accumulated wizard fields
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let priority = field(fields, "priority")
            .parse::<u8>()
            .unwrap_or(2)
            .clamp(1, 3);
        let profile_id = field(fields, "profile_id");
        let order_id = field(fields, "order_id");
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            profile_id: (!profile_id.is_empty()).then(|| profile_id.to_string()),
            order_id: (!order_id.is_empty()).then(|| order_id.to_string()),
            subject: field(fields, "subject").to_string(),
            description: field(fields, "description").trim().to_string(),
            category: field(fields, "category").to_string(),
            priority,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn priority_label(&self) -> &'static str {
        match self.priority {
            1 => "high",
            2 => "medium",
            _ => "low",
        }
    }
}
