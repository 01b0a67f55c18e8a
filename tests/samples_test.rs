use valuefmt::config::Config;
use valuefmt::samples::run_samples;
use valuefmt::{CaseMapping, Person, ValueKind};

#[test]
fn default_run_reports_string_kinds() {
    let report = run_samples(&Config::default());
    let kinds: Vec<_> = report
        .formatted
        .iter()
        .filter_map(|s| s.output_kind())
        .map(|k| k.to_string())
        .collect();
    assert_eq!(kinds, vec!["string", "string"]);
    assert_eq!(report.merged[0].name, "Shamim");
    assert_eq!(report.merged[0].age, 28);
    assert_eq!(report.merged[0].profession, "Web dev");
}

#[test]
fn configured_formatting_applies() {
    let mut config = Config::default();
    config.formatting.fraction_digits = 1;
    config.formatting.case_mapping = CaseMapping::Ascii;
    config.samples.inputs = serde_yaml::from_str("[über, 0.25, true]").unwrap();
    config.samples.people = vec![Person::new("Ada", 36)];

    let report = run_samples(&config);
    assert_eq!(report.formatted[0].result.as_deref().unwrap(), "üBER");
    // 0.25 is an exact tie at one digit
    assert_eq!(report.formatted[1].result.as_deref().unwrap(), "0.3");
    assert!(report.formatted[2].result.is_err());
    assert_eq!(report.formatted[2].output_kind(), None);
    assert_eq!(report.formatted[1].output_kind(), Some(ValueKind::Text));
    assert_eq!(report.rejected().count(), 1);
}

#[test]
fn empty_samples_produce_empty_report() {
    let mut config = Config::default();
    config.samples.inputs.clear();
    config.samples.people.clear();
    let report = run_samples(&config);
    assert!(report.formatted.is_empty());
    assert!(report.merged.is_empty());
}
