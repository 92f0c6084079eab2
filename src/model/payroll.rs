use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::FormError;
use crate::utils::format::{ISO_DATE, deserialize_date, parse_date, today};

/// Payroll record as stored by the payroll service. `net_salary` is computed
/// server-side and only ever displayed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: u64,
    pub employee_id: u64,
    pub base_salary: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub deductions: f64,
    pub net_salary: f64,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub payment_date: Option<NaiveDate>,
}

/// Body of `POST /` on the payroll service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayroll {
    pub employee_id: u64,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    #[serde(serialize_with = "serialize_date")]
    pub payment_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&date.format(ISO_DATE).to_string())
}

/// Raw payroll form fields, kept as text so a rejected submission can be
/// rendered back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayrollForm {
    pub employee_id: String,
    pub base_salary: String,
    pub bonus: String,
    pub deductions: String,
    pub payment_date: String,
}

impl Default for PayrollForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            base_salary: String::new(),
            bonus: String::new(),
            deductions: String::new(),
            payment_date: today(),
        }
    }
}

impl From<&Payroll> for PayrollForm {
    fn from(p: &Payroll) -> Self {
        Self {
            employee_id: p.employee_id.to_string(),
            base_salary: p.base_salary.to_string(),
            bonus: p.bonus.to_string(),
            deductions: p.deductions.to_string(),
            payment_date: p
                .payment_date
                .map(|d| d.format(ISO_DATE).to_string())
                .unwrap_or_default(),
        }
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value)
    }
}

/// Empty optional amounts count as zero.
fn amount(value: &str, field: &'static str) -> Result<f64, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FormError::InvalidNumber(field))
}

pub(crate) fn employee_id(value: &str) -> Result<u64, FormError> {
    required(value, "employeeId")?
        .parse()
        .map_err(|_| FormError::InvalidNumber("employeeId"))
}

pub(crate) fn date(value: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    parse_date(required(value, field)?).ok_or(FormError::InvalidDate(field))
}

impl PayrollForm {
    pub fn to_create(&self) -> Result<CreatePayroll, FormError> {
        Ok(CreatePayroll {
            employee_id: employee_id(&self.employee_id)?,
            base_salary: amount(required(&self.base_salary, "baseSalary")?, "baseSalary")?,
            bonus: amount(&self.bonus, "bonus")?,
            deductions: amount(&self.deductions, "deductions")?,
            payment_date: date(&self.payment_date, "paymentDate")?,
        })
    }
}
