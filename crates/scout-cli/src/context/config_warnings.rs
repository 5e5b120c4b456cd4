use scout_config::ENV_PREFIX;

/// Config sections that can be set from `SCOUT_<SECTION>__<FIELD>`.
const SECTIONS: &[(&str, &str)] = &[
    ("FETCH", "TIMEOUT_SECS"),
    ("NEWS", "ENDPOINT"),
    ("STORE", "DB_PATH"),
    ("VAULT", "SECRET_DIGEST"),
];

/// Env keys under the prefix that are read directly, not through figment.
const DIRECT_KEYS: &[&str] = &["SCOUT_LOG", "SCOUT_VAULT_SECRET"];

/// Emit warnings for likely mistyped env var keys that figment silently ignores.
pub fn warn_misnamed_env() {
    for warning in collect_misnamed_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_misnamed_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| !DIRECT_KEYS.contains(&key.as_str()))
        .collect::<Vec<_>>();

    let mut warnings = Vec::new();
    for (section, example_field) in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        let misnamed = env_keys
            .iter()
            .any(|key| key.starts_with(&single) && !key.starts_with(&double));
        if misnamed {
            warnings.push(format!(
                "{} config ignores {single}* env vars. Use double underscores (example: {double}{example_field}).",
                section.to_lowercase()
            ));
        }
    }
    warnings
}
