#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use mytime::libs::config::Config;
    use mytime::libs::summary::{LineCounts, Summary};
    use mytime::libs::task::TaskLineParser;
    use mytime::libs::time_span::TimeSpanFormat;

    fn parser() -> TaskLineParser {
        TaskLineParser::new(':').unwrap().on_day(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn morning() -> Vec<&'static str> {
        vec![
            "- `09:00` //_Start_",
            "- `09:30` Coding",
            "- `10:00` Coding",
            "- `10:15` Email",
        ]
    }

    #[test]
    fn test_scan_aggregates_by_name() {
        let summary = Summary::scan(morning(), &parser());

        assert_eq!(summary.span("Coding").unwrap().span_minutes, 60);
        assert_eq!(summary.span("Email").unwrap().span_minutes, 15);
        assert_eq!(summary.total, 75);
        assert_eq!(
            summary.counts,
            LineCounts {
                valid: 4,
                comments: 0,
                invalid: 0
            }
        );
        let names = summary.spans().map(|span| span.text.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Coding", "Email"]);
    }

    #[test]
    fn test_scan_classifies_lines() {
        let lines = [
            "- `09:00` Arrived",
            "",
            "- `09:45` Coding",
            "not a task",
            "- `10:00` //_Coffee_",
            "- `11:00` Coding",
            "- `11:30` Email // reply to Ann",
        ];
        let summary = Summary::scan(lines, &parser());

        assert_eq!(summary.span("Arrived"), None);
        assert_eq!(summary.span("Coding").unwrap().span_minutes, 105);
        assert_eq!(summary.span("Email").unwrap().span_minutes, 30);
        assert_eq!(summary.total, 135);
        assert_eq!(
            summary.counts,
            LineCounts {
                valid: 4,
                comments: 1,
                invalid: 1
            }
        );
    }

    #[test]
    fn test_scan_leading_invalid_line() {
        let lines = ["garbage", "- `09:00` Coding", "- `10:00` Coding"];
        let summary = Summary::scan(lines, &parser());

        assert_eq!(summary.span("Coding").unwrap().span_minutes, 60);
        assert_eq!(summary.counts.valid, 2);
        assert_eq!(summary.counts.invalid, 1);
    }

    #[test]
    fn test_scan_across_midnight() {
        let lines = ["- `23:30` //_Late shift_", "- `00:15` Deploy"];
        let summary = Summary::scan(lines, &parser());
        assert_eq!(summary.span("Deploy").unwrap().span_minutes, 45);
    }

    #[test]
    fn test_scan_empty_range() {
        let summary = Summary::scan(Vec::<String>::new(), &parser());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.counts, LineCounts::default());
        assert_eq!(summary.spans().count(), 0);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let first = Summary::scan(morning(), &parser());
        let second = Summary::scan(morning(), &parser());
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_is_sum_of_spans() {
        let lines = [
            "- `08:00` //_Start_",
            "- `08:20` A",
            "- `08:50` B",
            "- `09:00` //_Break_",
            "- `09:40` A",
            "- `10:05` C",
        ];
        let summary = Summary::scan(lines, &parser());
        let sum: i64 = summary.spans().map(|span| span.span_minutes).sum();
        assert_eq!(summary.total, sum);
        assert_eq!(summary.total, 115);
    }

    #[test]
    fn test_render_table() {
        let summary = Summary::scan(morning(), &parser());
        let now = NaiveTime::from_hms_opt(10, 20, 0).unwrap();

        let expected = [
            "| Time span          | Task      |",
            "| -----------------: | --------- |",
            "|         `1.00 h`   | Coding    |",
            "|         `0.25 h`   | Email     |",
            "|       **`1.25 h`** | **Total** |",
            "",
            "> _Last update 10:20_ / Lines [valid:4, comments:0, invalid:0]",
            "",
        ]
        .join("\n");
        assert_eq!(summary.render(&Config::default(), &now), expected);
    }

    #[test]
    fn test_render_widens_name_column() {
        let lines = ["- `09:00` //_Start_", "- `10:45` Code review"];
        let summary = Summary::scan(lines, &parser());
        let config = Config {
            time_span_format: TimeSpanFormat::HoursAndMinutes,
            ..Default::default()
        };
        let rendered = summary.render(&config, &NaiveTime::from_hms_opt(11, 0, 0).unwrap());

        assert!(rendered.starts_with("| Time span          | Task        |\n| -----------------: | ----------- |\n"));
        assert!(rendered.contains("|          `01:45`   | Code review |"));
        assert!(rendered.contains("|        **`01:45`** | **Total**   |"));
    }

    #[test]
    fn test_render_short_task_with_rounding_step() {
        let lines = ["- `09:00` //_Start_", "- `09:07` Email"];
        let summary = Summary::scan(lines, &parser());
        let config = Config {
            time_span_format: TimeSpanFormat::MinutesOrHours,
            time_span_step: 15,
            ..Default::default()
        };
        let rendered = summary.render(&config, &NaiveTime::from_hms_opt(9, 10, 0).unwrap());

        assert!(rendered.contains("|            `7 m`   | Email     |"));
        assert!(rendered.contains("|          **`7 m`** | **Total** |"));
    }

    #[test]
    fn test_render_empty_summary() {
        let summary = Summary::scan(Vec::<String>::new(), &parser());
        let rendered = summary.render(&Config::default(), &NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert!(rendered.contains("|       **`0.00 h`** | **Total** |"));
        assert!(rendered.ends_with("> _Last update 08:00_ / Lines [valid:0, comments:0, invalid:0]\n"));
    }
}
