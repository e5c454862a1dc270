//! Transfer memo and the clipboard capability

use super::support_code::SupportCode;
use crate::features::settings::BankAccount;

/// Capability: write text to the host clipboard
///
/// Writes are fire-and-forget; implementations swallow failures.
pub trait ClipboardPort {
    fn write_text(&mut self, text: String);
}

/// Five lines: bank, alias, holder, amount, support code
pub fn transfer_memo(bank: &BankAccount, amount: &str, code: &SupportCode) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}",
        bank.bank_name, bank.account_alias, bank.holder_name_plain, amount, code
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_memo_layout() {
        let code = SupportCode::generate_with(&mut StdRng::seed_from_u64(1));
        let memo = transfer_memo(&BankAccount::default(), "100.000đ", &code);
        let lines: Vec<&str> = memo.lines().collect();

        assert_eq!(
            lines,
            vec![
                "VIETCOMBANK",
                "ANACE",
                "VO PHAM TRUONG AN",
                "100.000đ",
                code.to_string().as_str(),
            ]
        );
    }
}
