//! Operator-facing console output.
//!
//! Everything here is plain text for a human at a terminal. The plaintext
//! password is included: this is a fixture tool for trusted local machines
//! only, never for shared or production databases.

use std::fmt::Write;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::config::SeedConfig;
use crate::generators::GeneratedAccount;
use crate::models::{CreatedAccount, Credentials};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Printed before anything touches the database.
pub fn render_intro(account: &GeneratedAccount) -> String {
    format!(
        "Creating {} tier test user...\n\nEmail will be: {}\nPassword will be: {}\n",
        account.subscription.plan,
        account.email,
        account.password,
    )
}

/// Credentials, user, subscription and usage sections for a created account.
pub fn render_summary(credentials: &Credentials, created: &CreatedAccount) -> String {
    let user = &created.user;
    let sub = &created.subscription;
    let usage = &created.usage;
    let next_billing = sub
        .next_billed_at
        .map(iso8601)
        .unwrap_or_else(|| "N/A".to_string());

    let mut out = String::new();
    out.push_str("✓ Test user created successfully!\n\n");

    section(
        &mut out,
        "USER CREDENTIALS",
        &[
            format!("Email:    {}", credentials.email),
            format!("Password: {}", credentials.password),
        ],
    );
    section(
        &mut out,
        "USER DETAILS",
        &[
            format!("User ID:  {}", user.id),
            format!("Name:     {}", user.name),
            format!("Role:     {}", user.role),
            format!("Verified: {}", user.verified),
        ],
    );
    section(
        &mut out,
        "SUBSCRIPTION DETAILS",
        &[
            format!("Plan:          {}", sub.plan),
            format!("Status:        {}", sub.status),
            format!("Start Date:    {}", iso8601(sub.start_date)),
            format!("Next Billing:  {next_billing}"),
        ],
    );
    section(
        &mut out,
        "USAGE LIMITS",
        &[
            format!("Links:  {}/{}", usage.links_count, usage.links_limit),
            format!("Clicks: {}/{}", usage.clicks_count, usage.clicks_limit),
        ],
    );

    out
}

/// What to do with the account once it exists.
pub fn render_next_steps(config: &SeedConfig, credentials: &Credentials) -> String {
    format!(
        "Next steps:\n\
         1. Ensure backend is running on {}\n\
         2. Ensure frontend is running on {}\n\
         3. Login with the credentials above\n\
         \n\
         Credentials for copy-paste:\n\
         {}\n\
         {}\n",
        config.backend_url, config.frontend_url, credentials.email, credentials.password,
    )
}

fn section(out: &mut String, title: &str, lines: &[String]) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{title}\n{RULE}");
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "{RULE}\n");
}

/// UTC with millisecond precision, e.g. `2023-11-14T22:13:20.123Z`.
fn iso8601(at: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    let utc = at.to_offset(UtcOffset::UTC);
    utc.format(format).unwrap_or_else(|_| utc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthProvider, Subscription, Usage, User};
    use time::Duration;
    use uuid::Uuid;

    fn sample_account() -> (Credentials, CreatedAccount) {
        let user_id = Uuid::new_v4();
        let start = OffsetDateTime::from_unix_timestamp_nanos(1_700_000_000_123_456_789).unwrap();
        let email = "business-test-1700000000000@example.com".to_string();

        let created = CreatedAccount {
            user: User {
                id: user_id,
                email: email.clone(),
                name: "Business Test User".to_string(),
                password: "$2b$10$hash".to_string(),
                verified: true,
                role: "USER".to_string(),
                created_at: start,
            },
            auth_providers: vec![AuthProvider {
                id: Uuid::new_v4(),
                user_id,
                provider: "EMAIL".to_string(),
                provider_id: email.clone(),
            }],
            subscription: Subscription {
                id: Uuid::new_v4(),
                user_id,
                plan: "BUSINESS".to_string(),
                status: "active".to_string(),
                start_date: start,
                end_date: None,
                next_billed_at: Some(start + Duration::days(30)),
                scheduled_to_be_cancelled: false,
            },
            usage: Usage {
                id: Uuid::new_v4(),
                user_id,
                links_count: 0,
                links_limit: 1000,
                clicks_count: 0,
                clicks_limit: 100_000,
            },
        };
        let credentials = Credentials {
            email,
            password: "TestBusiness123!".to_string(),
            user_id,
        };
        (credentials, created)
    }

    #[test]
    fn test_summary_sections() {
        let (credentials, created) = sample_account();
        let out = render_summary(&credentials, &created);

        for title in [
            "USER CREDENTIALS",
            "USER DETAILS",
            "SUBSCRIPTION DETAILS",
            "USAGE LIMITS",
        ] {
            assert!(out.contains(title), "missing {title}");
        }
        assert!(out.contains("Password: TestBusiness123!"));
        assert!(out.contains(&format!("User ID:  {}", credentials.user_id)));
        assert!(out.contains("Verified: true"));
        assert!(out.contains("Plan:          BUSINESS"));
        assert!(out.contains("Start Date:    2023-11-14T22:13:20.123Z"));
        assert!(out.contains("Next Billing:  2023-12-14T22:13:20.123Z"));
        assert!(out.contains("Links:  0/1000"));
        assert!(out.contains("Clicks: 0/100000"));
    }

    #[test]
    fn test_dates_are_utc_milliseconds() {
        let whole = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(iso8601(whole), "2023-11-14T22:13:20.000Z");

        let offset = whole.to_offset(UtcOffset::from_hms(2, 0, 0).unwrap());
        assert_eq!(iso8601(offset), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_missing_next_billing() {
        let (credentials, mut created) = sample_account();
        created.subscription.next_billed_at = None;

        let out = render_summary(&credentials, &created);
        assert!(out.contains("Next Billing:  N/A"));
    }

    #[test]
    fn test_next_steps() {
        let (credentials, _) = sample_account();
        let out = render_next_steps(&SeedConfig::default(), &credentials);

        assert!(out.contains("backend is running on http://localhost:3000"));
        assert!(out.contains("frontend is running on http://localhost:4200"));
        assert!(out.ends_with(&format!(
            "{}\n{}\n",
            credentials.email, credentials.password
        )));
    }
}
