use std::fmt::Display;

use chrono::NaiveDate;

use super::table::Tabular;
use crate::resources::{
    AuditEntry, BankAccount, Branch, Customer, Maintenance, Payment, Rental, StaffMember, Vehicle,
};

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

fn date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

impl Tabular for Vehicle {
    fn headers() -> &'static [&'static str] {
        &["ID", "Type", "Vehicle", "Daily Rate", "Branch", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.vehicle_id),
            opt(&self.vehicle_type),
            self.label(),
            money(self.daily_rate),
            self.branch
                .as_ref()
                .map(|b| opt(&b.branch_name))
                .unwrap_or_default(),
            opt(&self.availability_status),
        ]
    }
}

impl Tabular for Customer {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "NIC/Passport", "Phone", "Email", "License"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.customer_id),
            opt(&self.full_name),
            opt(&self.nic_passport_no),
            opt(&self.phone_no),
            opt(&self.email),
            opt(&self.license_no),
        ]
    }
}

impl Tabular for StaffMember {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Role", "Phone", "Email", "Branch"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.staff_id),
            opt(&self.full_name),
            opt(&self.role),
            opt(&self.phone_no),
            opt(&self.email),
            self.branch
                .as_ref()
                .map(|b| opt(&b.branch_name))
                .unwrap_or_default(),
        ]
    }
}

impl Tabular for Branch {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Location", "Contact", "Manager"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.branch_id),
            opt(&self.branch_name),
            opt(&self.location),
            opt(&self.contact_no),
            opt(&self.manager),
        ]
    }
}

impl Tabular for Rental {
    fn headers() -> &'static [&'static str] {
        &["ID", "Customer", "Vehicle", "From", "To", "Amount", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.rental_id),
            self.customer
                .as_ref()
                .map(|c| c.full_name.clone().unwrap_or_else(|| opt(&c.customer_id)))
                .unwrap_or_default(),
            self.vehicle.as_ref().map(Vehicle::label).unwrap_or_default(),
            date(self.rental_date),
            date(self.return_date),
            money(self.total_amount),
            opt(&self.rental_status),
        ]
    }
}

impl Tabular for Payment {
    fn headers() -> &'static [&'static str] {
        &["ID", "Rental", "Date", "Method", "Amount", "Status", "Slip"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.payment_id),
            self.rental
                .as_ref()
                .map(|r| opt(&r.rental_id))
                .unwrap_or_default(),
            date(self.payment_date),
            opt(&self.payment_method),
            money(self.amount),
            opt(&self.payment_status),
            opt(&self.slip_file_name),
        ]
    }
}

impl Tabular for BankAccount {
    fn headers() -> &'static [&'static str] {
        &["ID", "Bank", "Branch", "Account No", "Holder", "Type", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.account_id),
            opt(&self.bank_name),
            opt(&self.branch),
            opt(&self.account_number),
            opt(&self.account_holder_name),
            opt(&self.account_type),
            if self.is_active { "yes" } else { "no" }.to_string(),
        ]
    }
}

impl Tabular for Maintenance {
    fn headers() -> &'static [&'static str] {
        &["ID", "Vehicle", "Date", "Description", "Cost", "Next Service"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.maintenance_id),
            self.vehicle.as_ref().map(Vehicle::label).unwrap_or_default(),
            date(self.maintenance_date),
            opt(&self.description),
            money(self.cost),
            date(self.next_service_date),
        ]
    }
}

impl Tabular for AuditEntry {
    fn headers() -> &'static [&'static str] {
        &["ID", "Rental", "Action", "Changed By", "Changed At"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt(&self.id),
            opt(&self.rental_id),
            self.action.clone(),
            self.changed_by.clone(),
            self.changed_at.clone(),
        ]
    }
}
