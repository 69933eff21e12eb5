//! Client-side checks run before a dialog submits.
//!
//! These only catch what a user can fix in the form. Anything deeper
//! (availability, referential integrity) is the server's call.

use chrono::NaiveDate;
use thiserror::Error;

use super::dialog::DialogMode;

use crate::resources::{
    BankAccount, Branch, Customer, Maintenance, Payment, Rental, StaffMember, Vehicle,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill all required fields.")]
    MissingField { field: &'static str },

    #[error("Rental date cannot be in the past.")]
    RentalDateInPast,

    #[error("Return date cannot be before the rental date.")]
    ReturnBeforeRental,

    #[error("{field} must be greater than zero.")]
    NotPositive { field: &'static str },
}

impl FormError {
    /// Name of the offending field, when one is known.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FormError::MissingField { field } | FormError::NotPositive { field } => Some(*field),
            FormError::RentalDateInPast => Some("rentalDate"),
            FormError::ReturnBeforeRental => Some("returnDate"),
        }
    }
}

/// Form validation for a record about to be sent.
pub trait Validate {
    /// `today` is the local calendar date the check is relative to; `mode`
    /// tells a new record from an edit of an existing one.
    fn validate(&self, today: NaiveDate, mode: DialogMode) -> Result<(), FormError>;
}

fn require_text(value: &Option<String>, field: &'static str) -> Result<(), FormError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(FormError::MissingField { field }),
    }
}

fn require<T>(value: &Option<T>, field: &'static str) -> Result<(), FormError> {
    value
        .as_ref()
        .map(|_| ())
        .ok_or(FormError::MissingField { field })
}

fn require_positive(value: Option<f64>, field: &'static str) -> Result<(), FormError> {
    match value {
        None => Err(FormError::MissingField { field }),
        Some(v) if v <= 0.0 => Err(FormError::NotPositive { field }),
        Some(_) => Ok(()),
    }
}

impl Validate for Vehicle {
    fn validate(&self, _today: NaiveDate, _mode: DialogMode) -> Result<(), FormError> {
        require_text(&self.vehicle_type, "vehicleType")?;
        require_text(&self.brand, "brand")?;
        require_text(&self.model, "model")?;
        require_text(&self.registration_no, "registrationNo")?;
        require_positive(self.daily_rate, "dailyRate")
    }
}

impl Validate for Customer {
    fn validate(&self, _today: NaiveDate, _mode: DialogMode) -> Result<(), FormError> {
        require_text(&self.full_name, "fullName")?;
        require_text(&self.nic_passport_no, "nicPassportNo")?;
        require_text(&self.phone_no, "phoneNo")?;
        require_text(&self.email, "email")?;
        require_text(&self.license_no, "licenseNo")
    }
}

impl Validate for StaffMember {
    fn validate(&self, _today: NaiveDate, _mode: DialogMode) -> Result<(), FormError> {
        require_text(&self.full_name, "fullName")?;
        require_text(&self.role, "role")
    }
}

impl Validate for Branch {
    fn validate(&self, _today: NaiveDate, _mode: DialogMode) -> Result<(), FormError> {
        require_text(&self.branch_name, "branchName")?;
        require_text(&self.location, "location")
    }
}

impl Validate for Rental {
    fn validate(&self, today: NaiveDate, mode: DialogMode) -> Result<(), FormError> {
        let vehicle = self.vehicle.as_ref().and_then(|v| v.vehicle_id);
        let (Some(_), Some(start), Some(end)) = (vehicle, self.rental_date, self.return_date) else {
            let field = if vehicle.is_none() {
                "vehicle"
            } else if self.rental_date.is_none() {
                "rentalDate"
            } else {
                "returnDate"
            };
            return Err(FormError::MissingField { field });
        };

        // Only new bookings are held to today.
        if mode == DialogMode::Create && start < today {
            return Err(FormError::RentalDateInPast);
        }
        if end < start {
            return Err(FormError::ReturnBeforeRental);
        }
        Ok(())
    }
}

impl Validate for Payment {
    fn validate(&self, _today: NaiveDate, _mode: DialogMode) -> Result<(), FormError> {
        let rental = self.rental.as_ref().and_then(|r| r.rental_id);
        require(&rental, "rental")?;
        require(&self.payment_method, "paymentMethod")?;
        require_positive(self.amount, "amount")
    }
}

impl Validate for BankAccount {
    fn validate(&self, _today: NaiveDate, _mode: DialogMode) -> Result<(), FormError> {
        require_text(&self.bank_name, "bankName")?;
        require_text(&self.account_number, "accountNumber")?;
        require_text(&self.account_holder_name, "accountHolderName")
    }
}

impl Validate for Maintenance {
    fn validate(&self, _today: NaiveDate, _mode: DialogMode) -> Result<(), FormError> {
        let vehicle = self.vehicle.as_ref().and_then(|v| v.vehicle_id);
        require(&vehicle, "vehicle")?;
        require(&self.maintenance_date, "maintenanceDate")?;
        require_text(&self.description, "description")
    }
}
