//! System identity and clock settings.

use crate::client::response::{ApiResult, sections};
use crate::command::CliCommand;
use crate::error::Result;
use crate::transport::{Refresh, Transport};

/// `show system` and the `system <field> "<value>"` commands.
///
/// Setters return the refreshed `show system` document when they succeed.
pub struct SystemEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> SystemEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    /// Get name, contact, location, uptime and clock settings.
    pub async fn info(&mut self) -> Result<ApiResult> {
        self.transport.fetch(show_system()).await
    }

    pub async fn set_name(&mut self, name: &str) -> Result<ApiResult> {
        self.set("name", name).await
    }

    pub async fn set_contact(&mut self, contact: &str) -> Result<ApiResult> {
        self.set("contact", contact).await
    }

    pub async fn set_location(&mut self, location: &str) -> Result<ApiResult> {
        self.set("location", location).await
    }

    /// Set the date, formatted as the switch expects (`MM/DD/YYYY`).
    pub async fn set_date(&mut self, date: &str) -> Result<ApiResult> {
        self.set("date", date).await
    }

    /// Set the time, formatted as the switch expects (`HH:MM:SS`).
    pub async fn set_time(&mut self, time: &str) -> Result<ApiResult> {
        self.set("time", time).await
    }

    pub async fn set_timezone(&mut self, timezone: &str) -> Result<ApiResult> {
        self.set("timezone", timezone).await
    }

    async fn set(&mut self, field: &'static str, value: &str) -> Result<ApiResult> {
        let write = CliCommand::new("system")
            .arg(field)
            .quoted(field, value)?
            .into_request();
        self.transport.run_then_refresh(write, show_system()).await
    }
}

fn show_system() -> Refresh {
    let request = CliCommand::new("show").arg("system").into_request();
    Refresh::normalized(request, sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::client::response::Output;
    use crate::endpoints::testing::FakeTransport;

    const SHOW_SYSTEM: &str = "\
System:
  Description:  Alcatel-Lucent Enterprise OS6860E-24 8.9.221.R03 GA, December 07, 2023.,
  Object ID:    1.3.6.1.4.1.6486.801.1.1.2.1.11.1.2,
  Up Time:      10 days 4 hours 2 minutes and 11 seconds,
  Contact:      noc,
  Name:         core-sw1,
  Location:     lab,
  Services:     78,
  Date & Time:  TUE JUN 03 2025 10:37:20 (CEST)
Flash Space:
    Primary CMM:
      Available (bytes):  1111744512,
      Comments         :  None
";

    fn text(body: &str) -> ApiResult {
        ApiResult::new(200).with_output(Output::Text(body.to_string()))
    }

    #[tokio::test]
    async fn test_info() {
        let mut transport = FakeTransport::new().respond(text(SHOW_SYSTEM));

        let result = SystemEndpoint::new(&mut transport).info().await.unwrap();

        assert_eq!(transport.cmd(0), Some("show system"));
        let Some(Output::Sections(doc)) = result.output else {
            panic!("expected sectioned output");
        };
        let system = doc["System"].as_section().unwrap();
        assert_eq!(system["Name"], "core-sw1");
        assert_eq!(system["Date & Time"], "TUE JUN 03 2025 10:37:20 (CEST)");
    }

    #[tokio::test]
    async fn test_set_name_quotes_value() {
        let mut transport = FakeTransport::new()
            .respond(ApiResult::new(200))
            .respond(text(SHOW_SYSTEM));

        let result = SystemEndpoint::new(&mut transport)
            .set_name("core sw1")
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(transport.cmd(0), Some(r#"system name "core sw1""#));
        assert_eq!(transport.cmd(1), Some("show system"));
        assert!(matches!(result.output, Some(Output::Sections(_))));
    }

    #[tokio::test]
    async fn test_setters() {
        let mut transport = FakeTransport::new();
        let mut system = SystemEndpoint::new(&mut transport);

        system.set_contact("noc").await.unwrap();
        system.set_location("rack 4").await.unwrap();
        system.set_date("06/03/2025").await.unwrap();
        system.set_time("10:37:20").await.unwrap();
        system.set_timezone("CET").await.unwrap();
        drop(system);

        assert_eq!(transport.cmd(0), Some(r#"system contact "noc""#));
        assert_eq!(transport.cmd(2), Some(r#"system location "rack 4""#));
        assert_eq!(transport.cmd(4), Some(r#"system date "06/03/2025""#));
        assert_eq!(transport.cmd(6), Some(r#"system time "10:37:20""#));
        assert_eq!(transport.cmd(8), Some(r#"system timezone "CET""#));
    }

    #[tokio::test]
    async fn test_embedded_quote_rejected() {
        let mut transport = FakeTransport::new();
        let err = SystemEndpoint::new(&mut transport)
            .set_location("bldg \"A\"")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(transport.requests.is_empty());
    }
}
