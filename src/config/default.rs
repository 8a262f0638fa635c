// SPDX-License-Identifier: MIT

//! The built-in rule table.

use std::collections::BTreeMap;

use super::schema::{Condition, EmolintConfig, RuleId, RuleSetting, RuleValue, Severity};

/// The closed set of allowed commit-type tokens.
pub const TYPE_ENUM: &[&str] = &[
    ":art:",
    ":zap:",
    ":fire:",
    ":bug:",
    ":ambulance:",
    ":sparkles:",
    ":memo:",
    ":rocket:",
    ":lipstick:",
    ":tada:",
    ":white_check_mark:",
    ":lock:",
    ":closed_lock_with_key:",
    ":bookmark:",
    ":rotating_light:",
    ":construction:",
    ":green_heart:",
    ":arrow_down:",
    ":arrow_up:",
    ":pushpin:",
    ":construction_worker:",
    ":chart_with_upwards_trend:",
    ":recycle:",
    ":heavy_plus_sign:",
    ":heavy_minus_sign:",
    ":wrench:",
    ":hammer:",
    ":globe_with_meridians:",
    ":pencil2:",
    ":poop:",
    ":rewind:",
    ":twisted_rightwards_arrows:",
    ":package:",
    ":alien:",
    ":truck:",
    ":page_facing_up:",
    ":boom:",
    ":bento:",
    ":wheelchair:",
    ":bulb:",
    ":beers:",
    ":speech_balloon:",
    ":card_file_box:",
    ":loud_sound:",
    ":mute:",
    ":busts_in_silhouette:",
    ":children_crossing:",
    ":building_construction:",
    ":iphone:",
    ":clown_face:",
    ":egg:",
    ":see_no_evil:",
    ":camera_flash:",
    ":alembic:",
    ":mag:",
    ":label:",
    ":seedling:",
    ":triangular_flag_on_post:",
    ":goal_net:",
    ":dizzy:",
    ":wastebasket:",
    ":passport_control:",
    ":adhesive_bandage:",
    ":monocle_face:",
    ":coffin:",
    ":test_tube:",
    ":necktie:",
    ":stethoscope:",
    ":bricks:",
    ":technologist:",
    ":money_with_wings:",
    ":thread:",
    ":safety_vest:",
];

/// Get the default configuration: the full rule table.
pub fn default_config() -> EmolintConfig {
    let mut rules = BTreeMap::new();

    rules.insert(
        RuleId::TypeEnum.as_str().to_string(),
        RuleSetting::with_value(
            Severity::Error,
            Condition::Always,
            RuleValue::List(TYPE_ENUM.iter().map(|s| s.to_string()).collect()),
        ),
    );
    rules.insert(
        RuleId::BodyLeadingBlank.as_str().to_string(),
        RuleSetting::new(Severity::Error, Condition::Always),
    );
    rules.insert(
        RuleId::FooterLeadingBlank.as_str().to_string(),
        RuleSetting::new(Severity::Error, Condition::Always),
    );
    rules.insert(
        RuleId::HeaderMaxLength.as_str().to_string(),
        RuleSetting::with_value(Severity::Error, Condition::Always, RuleValue::Number(72)),
    );
    rules.insert(
        RuleId::ScopeCase.as_str().to_string(),
        RuleSetting::with_value(
            Severity::Error,
            Condition::Always,
            RuleValue::Text("lower-case".to_string()),
        ),
    );
    rules.insert(
        RuleId::SubjectCase.as_str().to_string(),
        RuleSetting::with_value(
            Severity::Error,
            Condition::Always,
            RuleValue::List(vec!["sentence-case".to_string()]),
        ),
    );
    rules.insert(
        RuleId::SubjectEmpty.as_str().to_string(),
        RuleSetting::new(Severity::Error, Condition::Never),
    );
    rules.insert(
        RuleId::SubjectFullStop.as_str().to_string(),
        RuleSetting::with_value(
            Severity::Error,
            Condition::Never,
            RuleValue::Text(".".to_string()),
        ),
    );
    rules.insert(
        RuleId::TypeCase.as_str().to_string(),
        RuleSetting::with_value(
            Severity::Error,
            Condition::Always,
            RuleValue::Text("lower-case".to_string()),
        ),
    );
    rules.insert(
        RuleId::TypeEmpty.as_str().to_string(),
        RuleSetting::new(Severity::Error, Condition::Never),
    );

    EmolintConfig { rules }
}

/// Generate an example configuration file.
///
/// Written by `emolint init`; the content mirrors the built-in defaults so
/// the file can be edited down rather than written from scratch.
pub fn example_config() -> String {
    let header = r#"# emolint configuration
#
# Each rule has a severity (disabled | warning | error), a condition
# (always | never), and an optional constraint value.

"#;

    let config = default_config();
    let body = toml::to_string_pretty(&config).unwrap_or_default();
    format!("{}{}", header, body)
}
