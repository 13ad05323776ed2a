//! 輸出格式
//!
//! ```text
//! Date (UTC): 2018-03-03 12:00:00+00:00
//! UNIX Seconds: 1520078400
//! ```

use std::fmt;

use crate::resolver::ResolvedRequest;
use crate::utils::time_utils::render_date_time;

impl ResolvedRequest {
    /// 每行一項：日期行，接著每個轉換器一行
    pub fn report_lines(&self) -> Vec<String> {
        let date_line = format!("Date (UTC): {}", render_date_time(&self.date_time));
        let converter_lines = self.converters.iter().map(|converter| {
            format!("{}: {}", converter.name(), converter.from_dt(&self.date_time))
        });

        std::iter::once(date_line).chain(converter_lines).collect()
    }
}

impl fmt::Display for ResolvedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.report_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
