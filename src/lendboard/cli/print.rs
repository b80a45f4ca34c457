use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use lendboard::api::{CmdMessage, MessageLevel, PageSummary};
use lendboard::config::DashConfig;
use lendboard::model::{UserRecord, UserStats, UserStatus};
use lendboard::query::PageWindow;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMNS: [(&str, usize); 6] = [
    ("ORGANIZATION", 13),
    ("USERNAME", 20),
    ("EMAIL", 24),
    ("PHONE NUMBER", 16),
    ("DATE JOINED", 22),
    ("STATUS", 11),
];

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_stats(stats: &UserStats) {
    let cards = [
        ("USERS", stats.total_users),
        ("ACTIVE USERS", stats.active_users),
        ("USERS WITH LOANS", stats.users_with_loans),
        ("USERS WITH SAVINGS", stats.users_with_savings),
    ];
    for (title, value) in cards {
        println!("{:<20}{}", title.dimmed(), group_thousands(value).bold());
    }
}

pub fn print_users(users: &[UserRecord], page: Option<&PageSummary>) {
    let header: String = COLUMNS
        .iter()
        .map(|(name, width)| fit(name, *width))
        .collect();
    println!("{}", header.trim_end().bold());

    for user in users {
        let date = format_date(&user.date_joined);
        let cells = [
            user.org_name.as_str(),
            user.user_name.as_str(),
            user.email.as_str(),
            user.phone_number.as_str(),
            date.as_str(),
        ];
        let line: String = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, width))| fit(cell, *width))
            .collect();
        println!("{}{}", line, status_colored(user.status));
    }

    if let Some(page) = page {
        println!();
        println!("{}", page_footer(page).dimmed());
    }
}

pub fn print_user_details(user: &UserRecord) {
    println!("{} {}", user.full_name().bold(), format!("({})", user.id).dimmed());
    println!(
        "{}  ₦{}  {}",
        status_colored(user.status),
        user.account_balance,
        user.account_number.dimmed()
    );
    if let Some(joined) = user.joined_at() {
        println!("{}", format!("Joined {}", format_time_ago(joined)).dimmed());
    }

    section("Personal Information");
    field("Full Name", &user.full_name());
    field("Phone Number", &user.profile.phone_number);
    field("Email Address", &user.email);
    field("BVN", &user.profile.bvn);
    field("Gender", &user.profile.gender);
    field("Address", &user.profile.address);
    field("Organization", &user.org_name);

    section("Education and Employment");
    let edu = &user.education;
    field("Level of Education", &edu.level);
    field("Employment Status", &edu.employment_status);
    field("Sector of Employment", &edu.sector);
    field("Duration of Employment", &edu.duration);
    field("Office Email", &edu.office_email);
    field(
        "Monthly Income",
        &format!("{} - {}", edu.monthly_income.0, edu.monthly_income.1),
    );
    field("Loan Repayment", &edu.loan_repayment);

    section("Socials");
    field("Twitter", &user.socials.twitter);
    field("Facebook", &user.socials.facebook);
    field("Instagram", &user.socials.instagram);

    section("Guarantor");
    field("Full Name", &user.guarantor.full_name());
    field("Phone Number", &user.guarantor.phone_number);
    field("Gender", &user.guarantor.gender);
    field("Address", &user.guarantor.address);
}

pub fn print_config(config: &DashConfig) {
    for key in DashConfig::KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

fn field(label: &str, value: &str) {
    println!("  {:<24}{}", label.dimmed(), value);
}

fn status_colored(status: UserStatus) -> ColoredString {
    let label = status.as_str();
    match status {
        UserStatus::Active => label.green(),
        UserStatus::Inactive => label.dimmed(),
        UserStatus::Pending => label.yellow(),
        UserStatus::Blacklisted => label.red(),
    }
}

pub(crate) fn page_footer(page: &PageSummary) -> String {
    let shown = PageWindow::new(page.current_page, page.items_per_page)
        .ok()
        .and_then(|window| window.shown_range(page.total_matches))
        .map(|(start, end)| format!("{}-{}", start, end))
        .unwrap_or_else(|| "0".to_string());
    format!(
        "Showing {} out of {} (page {} of {}, {} users in total)",
        shown,
        page.total_matches,
        page.current_page,
        page.total_pages,
        page.total_users
    )
}

/// `2023-01-15T10:30:00.000Z` renders as `Jan 15, 2023 10:30 AM` (UTC).
/// Unparseable input is shown as-is.
pub(crate) fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%b %-d, %Y %I:%M %p")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

pub(crate) fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Pads or truncates `s` to exactly `width` display columns, keeping one
/// column of gutter.
pub(crate) fn fit(s: &str, width: usize) -> String {
    let max = width.saturating_sub(1);
    let mut out = String::new();
    let mut current = 0;

    if s.width() > max {
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if current + w > max.saturating_sub(1) {
                break;
            }
            out.push(c);
            current += w;
        }
        out.push('…');
        current += 1;
    } else {
        out.push_str(s);
        current = s.width();
    }

    out.push_str(&" ".repeat(width.saturating_sub(current)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates_like_the_table() {
        assert_eq!(format_date("2023-01-15T10:30:00.000Z"), "Jan 15, 2023 10:30 AM");
        assert_eq!(format_date("2021-07-04T21:05:00Z"), "Jul 4, 2021 09:05 PM");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(500), "500");
        assert_eq!(group_thousands(2453), "2,453");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn fit_pads_and_truncates_to_width() {
        assert_eq!(fit("Lendsqr", 10), "Lendsqr   ");
        let cut = fit("flutterwave-enterprise", 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.contains('…'));
    }

    #[test]
    fn footer_reports_range_and_pages() {
        let page = PageSummary {
            current_page: 3,
            items_per_page: 10,
            total_matches: 25,
            total_pages: 3,
            total_users: 500,
        };
        assert_eq!(
            page_footer(&page),
            "Showing 21-25 out of 25 (page 3 of 3, 500 users in total)"
        );

        let past = PageSummary {
            current_page: 4,
            ..page
        };
        assert!(page_footer(&past).starts_with("Showing 0 out of 25"));
    }
}
