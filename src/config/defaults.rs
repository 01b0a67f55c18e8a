use super::*;
use crate::formatter::DEFAULT_FRACTION_DIGITS;

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            console_level: None,
            file_level: None,
            file: "/tmp/valuefmt.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            fraction_digits: DEFAULT_FRACTION_DIGITS,
            case_mapping: CaseMapping::Unicode,
        }
    }
}

#[allow(clippy::approx_constant)]
impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            inputs: vec![
                serde_yaml::Value::from("hello"),
                serde_yaml::Value::from(3.14159),
            ],
            people: vec![Person::new("Shamim", 28)],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            formatting: FormattingConfig::default(),
            samples: SamplesConfig::default(),
        }
    }
}
