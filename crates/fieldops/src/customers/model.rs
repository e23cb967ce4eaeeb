use serde::{Deserialize, Serialize};

use crate::projection::{PipelineStage, Projectable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: String,
    pub address: String,
    /// Display date of the last clean, "N/A" for leads.
    pub last_clean: String,
    pub last_service: Option<String>,
    pub customer_type: CustomerType,
    pub avatar: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,

    #[serde(default)]
    pub flags: Vec<CustomerFlag>,
    #[serde(default)]
    pub notes: Vec<String>,
    pub total_spend: Option<f64>,
    pub job_count: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Where a lead came from, e.g. "Google Maps".
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerType {
    Resi,
    Comm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerStatus {
    #[default]
    Normal,
    Overdue,
    Lead,
    Inactive,
}

impl CustomerStatus {
    pub fn pipeline_stage(&self) -> PipelineStage {
        match self {
            CustomerStatus::Lead => PipelineStage::Leads,
            CustomerStatus::Normal | CustomerStatus::Overdue | CustomerStatus::Inactive => {
                PipelineStage::Clients
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerFlag {
    Pets,
    Lock,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerFilter {
    #[default]
    All,
    Residential,
    Commercial,
    Overdue,
    Lead,
}

impl Projectable for Customer {
    type Category = CustomerFilter;

    fn in_category(&self, category: &CustomerFilter) -> bool {
        match category {
            CustomerFilter::All => true,
            CustomerFilter::Residential => self.customer_type == CustomerType::Resi,
            CustomerFilter::Commercial => self.customer_type == CustomerType::Comm,
            CustomerFilter::Overdue => self.status == CustomerStatus::Overdue,
            CustomerFilter::Lead => self.status == CustomerStatus::Lead,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str(), self.email.as_str()]
    }

    fn pipeline_stage(&self) -> Option<PipelineStage> {
        Some(self.status.pipeline_stage())
    }
}
