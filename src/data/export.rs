use crate::data::sessions::Account;

pub const CSV_HEADER: &str = "id,email,password,balance,status,createdAt";

pub fn to_csv(accounts: &[Account]) -> String {
    let mut lines = Vec::with_capacity(accounts.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for account in accounts {
        lines.push(format!(
            "{},{},{},{},{},{}",
            account.id,
            account.email,
            account.password,
            account.balance,
            account.status.as_str(),
            account.created_at,
        ));
    }
    lines.join("\n")
}

pub fn to_txt(accounts: &[Account]) -> String {
    accounts
        .iter()
        .map(|account| format!("{}:{}", account.email, account.password))
        .collect::<Vec<_>>()
        .join("\n")
}
