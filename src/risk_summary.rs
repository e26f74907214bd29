//! Risk summary derivation from a GoPlus address-security payload.
//!
//! The provider's `result` object has no stable schema: flag fields move
//! between nesting levels depending on chain and API version. The walk below
//! finds known flag keys wherever they appear.

use serde::Serialize;
use serde_json::Value;

/// Known risk-flag fields and their display labels.
pub const RISK_FLAG_CATALOG: &[(&str, &str)] = &[
    ("cybercrime", "網路犯罪活動"),
    ("money_laundering", "資金洗錢"),
    ("number_of_malicious_contracts_created", "建立惡意合約紀錄"),
    ("gas_abuse", "Gas 濫用行為"),
    ("financial_crime", "金融犯罪活動"),
    ("darkweb_transactions", "暗網交易"),
    ("reinit", "重入攻擊"),
    ("phishing_activities", "釣魚活動"),
    ("fake_kyc", "偽造 KYC"),
    ("blacklist_doubt", "可疑黑名單"),
    ("fake_standard_interface", "偽造標準介面"),
    ("stealing_attack", "竊盜攻擊"),
    ("blackmail_activities", "勒索活動"),
    ("sanctioned", "受制裁地址"),
    ("malicious_mining_activities", "惡意挖礦活動"),
    ("mixer", "混幣器"),
    ("fake_token", "假代幣"),
    ("honeypot_related_address", "蜜罐相關地址"),
];

/// Bookkeeping fields that never carry risk flags. Skipped with their subtree.
pub const IGNORED_FIELDS: &[&str] = &["data_source"];

pub const CAUSE_SEPARATOR: &str = "、";

pub const LOW_CONFIDENCE_MESSAGE: &str =
    "此地址暫時無查出高風險紀錄，但不代表此地址毫無風險，務必謹慎、謹慎再謹慎。";

/// Localized verdict for one provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub message: String,
    pub is_high_risk: bool,
}

impl RiskSummary {
    fn high_risk(causes: &[&str]) -> Self {
        Self {
            message: format!(
                "此地址可能與 {} 有關，故被標記為高風險地址，建議您提高警覺，謹慎小心為上。",
                causes.join(CAUSE_SEPARATOR)
            ),
            is_high_risk: true,
        }
    }

    fn low_confidence() -> Self {
        Self {
            message: LOW_CONFIDENCE_MESSAGE.to_string(),
            is_high_risk: false,
        }
    }
}

fn catalog_label(key: &str) -> Option<&'static str> {
    RISK_FLAG_CATALOG
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, label)| *label)
}

/// Lenient flag coercion: `true`, `1`, `"1"` and `"true"` in any case.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Display label for a flag key, falling back to the key with spaces.
pub fn risk_flag_label(key: &str) -> String {
    catalog_label(key)
        .map(str::to_string)
        .unwrap_or_else(|| key.replace('_', " "))
}

/// Derive a summary from a provider payload.
///
/// Returns `None` when there is no `result` container or when no known flag
/// field appears anywhere in it, so an unexpected payload is never reported
/// as low risk.
pub fn derive_risk_summary(payload: &Value) -> Option<RiskSummary> {
    let result = payload.get("result")?;
    if !(result.is_object() || result.is_array()) {
        return None;
    }

    let mut has_known_flags = false;
    // Insertion-ordered, deduplicated
    let mut causes: Vec<String> = Vec::new();
    let mut stack: Vec<&Value> = vec![result];

    while let Some(current) = stack.pop() {
        match current {
            Value::Array(items) => stack.extend(items.iter()),
            Value::Object(map) => {
                for (key, value) in map {
                    if IGNORED_FIELDS.contains(&key.as_str()) {
                        continue;
                    }

                    if catalog_label(key).is_some() {
                        has_known_flags = true;
                        if is_truthy(value) {
                            let label = risk_flag_label(key);
                            if !causes.contains(&label) {
                                causes.push(label);
                            }
                        }
                        // Flag fields are leaves
                        continue;
                    }

                    if value.is_object() || value.is_array() {
                        stack.push(value);
                    }
                }
            }
            _ => {}
        }
    }

    if !has_known_flags {
        return None;
    }

    if causes.is_empty() {
        return Some(RiskSummary::low_confidence());
    }

    let causes: Vec<&str> = causes.iter().map(String::as_str).collect();
    Some(RiskSummary::high_risk(&causes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_truthy() {
        for value in [json!(true), json!(1), json!(1.0), json!("1"), json!("true"), json!("TRUE"), json!("True")] {
            assert!(is_truthy(&value), "{} should be truthy", value);
        }
        for value in [
            json!(false),
            json!(0),
            json!(2),
            json!("0"),
            json!("false"),
            json!("yes"),
            json!(""),
            json!(null),
            json!({"detail": "1"}),
            json!(["1"]),
        ] {
            assert!(!is_truthy(&value), "{} should not be truthy", value);
        }
    }

    #[test]
    fn test_flagged_cause_is_high_risk() {
        let payload = json!({"code": 0, "result": {"cybercrime": "1"}});
        let summary = derive_risk_summary(&payload).unwrap();
        assert!(summary.is_high_risk);
        assert!(summary.message.contains("網路犯罪活動"));
    }

    #[test]
    fn test_known_fields_none_confirmed_is_low_confidence() {
        let payload = json!({"code": 0, "result": {"phishing_activities": "false", "mixer": 0}});
        let summary = derive_risk_summary(&payload).unwrap();
        assert!(!summary.is_high_risk);
        assert_eq!(summary.message, LOW_CONFIDENCE_MESSAGE);
    }

    #[test]
    fn test_no_known_fields_yields_none() {
        let payload = json!({"code": 0, "result": {"unrelated_field": "x"}});
        assert_eq!(derive_risk_summary(&payload), None);
    }

    #[test]
    fn test_missing_or_scalar_result_yields_none() {
        assert_eq!(derive_risk_summary(&json!({"code": 0})), None);
        assert_eq!(derive_risk_summary(&json!({"code": 0, "result": null})), None);
        assert_eq!(derive_risk_summary(&json!({"code": 0, "result": "cybercrime"})), None);
        assert_eq!(derive_risk_summary(&json!("not an object")), None);
    }

    #[test]
    fn test_ignored_subtree_is_skipped() {
        let payload = json!({"code": 0, "result": {"data_source": {"cybercrime": true}}});
        assert_eq!(derive_risk_summary(&payload), None);

        let payload = json!({
            "code": 0,
            "result": {"data_source": {"cybercrime": true}, "mixer": "0"}
        });
        let summary = derive_risk_summary(&payload).unwrap();
        assert!(!summary.is_high_risk);
    }

    #[test]
    fn test_deeply_nested_flags_are_found() {
        let payload = json!({
            "code": 0,
            "result": {
                "chains": [
                    {"details": {"labels": [{"sanctioned": "TRUE"}]}},
                    {"details": {"money_laundering": 1}}
                ]
            }
        });
        let summary = derive_risk_summary(&payload).unwrap();
        assert!(summary.is_high_risk);
        assert!(summary.message.contains("受制裁地址"));
        assert!(summary.message.contains("資金洗錢"));
    }

    #[test]
    fn test_flag_value_object_is_not_descended() {
        let payload = json!({"code": 0, "result": {"mixer": {"detail": "1", "cybercrime": "1"}}});
        let summary = derive_risk_summary(&payload).unwrap();
        assert!(!summary.is_high_risk);
    }

    #[test]
    fn test_causes_deduplicated_in_discovery_order() {
        let payload = json!({
            "code": 0,
            "result": {"cybercrime": "1", "mixer": true, "nested": {"cybercrime": "true"}}
        });
        let summary = derive_risk_summary(&payload).unwrap();
        assert_eq!(
            summary.message,
            "此地址可能與 網路犯罪活動、混幣器 有關，故被標記為高風險地址，建議您提高警覺，謹慎小心為上。"
        );
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let payload = json!({"code": 0, "result": {"fake_kyc": "1", "stealing_attack": 1}});
        assert_eq!(derive_risk_summary(&payload), derive_risk_summary(&payload));
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(risk_flag_label("fake_token"), "假代幣");
        assert_eq!(risk_flag_label("rug_pull_history"), "rug pull history");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = RiskSummary::low_confidence();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["isHighRisk"], false);
    }
}
