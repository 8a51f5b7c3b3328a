// sparkify-core/src/application/context.rs

use chrono::{Datelike, NaiveDate};
use serde_json::{Value, json};

/// Per-run values exposed to templated source locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub execution_date: NaiveDate,
}

impl RunContext {
    pub fn new(execution_date: NaiveDate) -> Self {
        Self { execution_date }
    }

    pub fn today() -> Self {
        Self::new(chrono::Utc::now().date_naive())
    }

    pub fn template_context(&self) -> Value {
        let date = self.execution_date;
        json!({
            "ds": date.format("%Y-%m-%d").to_string(),
            "ds_nodash": date.format("%Y%m%d").to_string(),
            "year": format!("{:04}", date.year()),
            "month": format!("{:02}", date.month()),
            "day": format!("{:02}", date.day()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn test_template_context_is_zero_padded() -> Result<()> {
        let date = NaiveDate::from_ymd_opt(2018, 11, 3).context("invalid date")?;
        let ctx = RunContext::new(date).template_context();
        assert_eq!(ctx["ds"], "2018-11-03");
        assert_eq!(ctx["ds_nodash"], "20181103");
        assert_eq!(ctx["year"], "2018");
        assert_eq!(ctx["month"], "11");
        assert_eq!(ctx["day"], "03");
        Ok(())
    }
}
