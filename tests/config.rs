#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Locale, TimeZone};
    use mytime::libs::config::{pick_random, split_alternatives, Config};
    use mytime::libs::time_span::TimeSpanFormat;
    use rand::{rngs::StdRng, SeedableRng};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context with a temporary directory acting as the user's home/appdata directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext { temp_dir }
        }
    }

    fn custom_config() -> Config {
        Config {
            start_message: "Hello".to_string(),
            task_list: "Coding | Email".to_string(),
            new_date_format: "%Y-%m-%d".to_string(),
            new_date_language: "it".to_string(),
            time_span_format: TimeSpanFormat::Both,
            time_span_hours_and_minutes_format: "HH.mm".to_string(),
            time_span_step: 15,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.time_span_format, TimeSpanFormat::DecimalHours);
        assert_eq!(config.time_span_hours_and_minutes_format, "HH:mm");
        assert_eq!(config.time_span_step, 0);
        assert_eq!(config.new_date_language, "en");
        assert!(config.task_list().is_empty());
        assert!(config.break_list().is_empty());
        assert_eq!(config.start_messages().len(), 3);
        assert_eq!(config.time_separator(), ':');
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("nested").join("config.json");
        let config = custom_config();
        config.save_to(&path).unwrap();

        let read_config = Config::read_from(&path).unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.time_separator(), '.');
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_in_data_directory(ctx: &mut ConfigTestContext) {
        std::env::set_var("HOME", ctx.temp_dir.path());
        std::env::set_var("LOCALAPPDATA", ctx.temp_dir.path());

        assert_eq!(Config::read().unwrap(), Config::default());
        assert!(!Config::delete().unwrap());

        custom_config().save().unwrap();
        let path = Config::path().unwrap();
        assert!(path.starts_with(ctx.temp_dir.path()));
        assert!(path.ends_with("config.json"));
        assert_eq!(Config::read().unwrap(), custom_config());

        assert!(Config::delete().unwrap());
        assert!(!path.exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "time_span_format": "hoursAndMinutes", "time_span_step": 5 }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.time_span_format, TimeSpanFormat::HoursAndMinutes);
        assert_eq!(config.time_span_step, 5);
        assert_eq!(config.task_placeholder, Config::default().task_placeholder);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test]
    fn test_split_alternatives() {
        assert_eq!(split_alternatives("Good morning! | Let's go |"), vec!["Good morning!", "Let's go"]);
        assert_eq!(split_alternatives("single"), vec!["single"]);
        assert!(split_alternatives("").is_empty());
        assert!(split_alternatives(" | ").is_empty());
    }

    #[test]
    fn test_pick_random() {
        let candidates = split_alternatives("a|b|c");
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(candidates.contains(&pick_random(&candidates, &mut rng)));
        }
        assert_eq!(pick_random(&[], &mut rng), "");
        assert_eq!(pick_random(&["only".to_string()], &mut rng), "only");
    }

    #[test]
    fn test_pick_random_is_reproducible() {
        let candidates = split_alternatives("a|b|c|d|e");
        let first = (0..10)
            .map(|_| pick_random(&candidates, &mut StdRng::seed_from_u64(9)))
            .collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(9);
        let again = pick_random(&candidates, &mut rng);
        assert!(first.iter().all(|picked| *picked == again));
    }

    #[test]
    fn test_placeholder_alternatives() {
        let config = Config {
            new_task_placeholder: "Something new".to_string(),
            new_break_placeholder: "Pause | Rest".to_string(),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(config.new_task_placeholder(&mut rng), "Something new");
        assert!(["Pause", "Rest"].contains(&config.new_break_placeholder(&mut rng).as_str()));
        assert_eq!(config.task_time_placeholder(&mut rng), "When did it end?");
    }

    #[test]
    fn test_date_locale() {
        let mut config = Config::default();
        assert_eq!(config.date_locale(), Locale::en_US);
        config.new_date_language = "it".to_string();
        assert_eq!(config.date_locale(), Locale::it_IT);
        config.new_date_language = "de-AT".to_string();
        assert_eq!(config.date_locale(), Locale::de_DE);
        config.new_date_language = "x".to_string();
        assert_eq!(config.date_locale(), Locale::en_US);
    }

    #[test]
    fn test_format_day() {
        let now = FixedOffset::east_opt(3600).unwrap().with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();

        assert_eq!(Config::default().format_day(&now).unwrap(), "Monday, 19 October 2026");
        assert_eq!(custom_config().format_day(&now).unwrap(), "2026-10-19");

        let italian = Config {
            new_date_format: "%d %B".to_string(),
            new_date_language: "it".to_string(),
            ..Default::default()
        };
        assert_eq!(italian.format_day(&now).unwrap(), "19 ottobre");
    }

    #[test]
    fn test_format_day_rejects_bad_pattern() {
        let now = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let config = Config {
            new_date_format: "%Q".to_string(),
            ..Default::default()
        };
        assert!(config.format_day(&now).is_err());
    }
}
