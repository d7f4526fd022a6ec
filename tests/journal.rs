#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
    use mytime::libs::config::Config;
    use mytime::libs::editor::{Document, Editor, Position, Selection};
    use mytime::libs::journal::{check_line, new_day_block, new_task_line, summary_block, JOURNAL_TITLE};
    use mytime::libs::prompt::{NoInput, Prompt};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::VecDeque;

    /// Answers pick-lists from a script and remembers what was asked.
    struct ScriptedPrompt {
        answers: VecDeque<Option<usize>>,
        asked: Vec<(Vec<String>, String)>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[Option<usize>]) -> Self {
            ScriptedPrompt {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn prompt_choice(&mut self, options: &[String], placeholder: &str) -> Result<Option<usize>> {
            self.asked.push((options.to_vec(), placeholder.to_string()));
            Ok(self.answers.pop_front().flatten())
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn config() -> Config {
        Config {
            start_message: "Good morning!".to_string(),
            task_list: "Email | Coding".to_string(),
            ..Default::default()
        }
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn monday_morning() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_new_day_on_empty_journal() {
        let mut doc = Document::from_text("");
        let cursor = new_day_block(&mut doc, Selection::default(), &config(), &monday_morning(), &mut rng()).unwrap();

        assert_eq!(
            doc.text(),
            format!("{}\n\n## Monday, 19 October 2026\n\n- `09:05` //_Good morning!_\n", JOURNAL_TITLE)
        );
        assert_eq!(cursor, Selection::caret(Position::new(5, 0)));
    }

    #[test]
    fn test_new_day_appends_without_title() {
        let existing = "# My Time\n\n## Sunday, 18 October 2026\n\n- `09:00` //_Hi_\n- `17:00` Coding\n";
        let mut doc = Document::from_text(existing);
        let caret = Selection::caret(Position::new(doc.last_line(), 0));
        new_day_block(&mut doc, caret, &config(), &monday_morning(), &mut rng()).unwrap();

        assert_eq!(
            doc.text(),
            format!("{}## Monday, 19 October 2026\n\n- `09:05` //_Good morning!_\n", existing)
        );
    }

    #[test]
    fn test_new_day_picks_a_start_message() {
        let config = Config::default();
        let mut doc = Document::from_text("");
        new_day_block(&mut doc, Selection::default(), &config, &monday_morning(), &mut rng()).unwrap();

        let opening = doc.read_line(4).unwrap();
        let task = check_line(&opening, &config).unwrap();
        assert!(task.is_break());
        assert!(config.start_messages().contains(&task.comment));
    }

    #[test]
    fn test_new_task_from_pick_lists() {
        let mut doc = Document::from_text("- `09:00` //_Start_\n");
        let mut prompt = ScriptedPrompt::new(&[Some(0), Some(1)]);
        let cursor = new_task_line(
            &mut doc,
            &mut prompt,
            Selection::caret(Position::new(1, 0)),
            false,
            &config(),
            at(9, 50),
            &mut rng(),
        )
        .unwrap();

        assert_eq!(doc.text(), "- `09:00` //_Start_\n- `09:50` Coding");
        assert_eq!(cursor, Selection::new(Position::new(1, 10), Position::new(1, 16)));

        let (times, time_placeholder) = &prompt.asked[0];
        assert_eq!(times.len(), 8);
        assert_eq!(times[0], "09:50 = 50 m");
        assert_eq!(time_placeholder, "When did it end?");

        let (names, name_placeholder) = &prompt.asked[1];
        assert_eq!(names, &vec!["New task".to_string(), "Coding".to_string(), "Email".to_string()]);
        assert_eq!(name_placeholder, "What are you working on?");
    }

    #[test]
    fn test_new_break_with_cancelled_prompts() {
        let config = Config {
            task_placeholder: "Type here".to_string(),
            ..config()
        };
        let mut doc = Document::from_text("- `09:00` //_Start_\n");
        let cursor = new_task_line(
            &mut doc,
            &mut NoInput,
            Selection::caret(Position::new(1, 0)),
            true,
            &config,
            at(9, 50),
            &mut rng(),
        )
        .unwrap();

        assert_eq!(doc.text(), "- `09:00` //_Start_\n- `09:05` //_Type here_");
        assert_eq!(cursor, Selection::new(Position::new(1, 13), Position::new(1, 22)));
    }

    #[test]
    fn test_new_task_without_suggestions() {
        let config = Config::default();
        let mut doc = Document::from_text("");
        let mut prompt = ScriptedPrompt::new(&[None]);
        new_task_line(&mut doc, &mut prompt, Selection::default(), false, &config, at(9, 50), &mut rng()).unwrap();

        assert_eq!(doc.text(), "- `09:55` New task");
        assert_eq!(prompt.asked.len(), 1);
    }

    #[test]
    fn test_new_task_replaces_current_line() {
        let config = Config::default();
        let mut doc = Document::from_text("- `09:00` //_Start_\n- `09:10` draft\nAfter");
        let selection = Selection::new(Position::new(1, 0), Position::new(1, 15));
        new_task_line(&mut doc, &mut NoInput, selection, false, &config, at(9, 50), &mut rng()).unwrap();

        assert_eq!(doc.text(), "- `09:00` //_Start_\n- `09:05` What are you working on?\nAfter");
    }

    #[test]
    fn test_new_task_line_is_parseable() {
        let config = config();
        let mut doc = Document::from_text("- `09:00` //_Start_\n");
        let mut prompt = ScriptedPrompt::new(&[Some(3), Some(2)]);
        new_task_line(&mut doc, &mut prompt, Selection::caret(Position::new(1, 0)), false, &config, at(9, 50), &mut rng()).unwrap();

        let task = check_line(&doc.read_line(1).unwrap(), &config).unwrap();
        assert_eq!(task.text, "Email");
        assert_eq!(task.end.time(), at(9, 45).time());
    }

    #[test]
    fn test_summary_block_inserted_below_range() {
        let config = config();
        let mut doc =
            Document::from_text("## Day\n- `09:00` //_Start_\n- `09:30` Coding\n- `10:00` Coding\n- `10:15` Email\nAfter");
        let (summary, cursor) = summary_block(&mut doc, Selection::lines(1, 4), &config, at(10, 20)).unwrap();

        assert_eq!(summary.total, 75);
        assert_eq!(cursor, Selection::caret(Position::new(4, 0)));
        assert_eq!(
            doc.text(),
            format!(
                "## Day\n- `09:00` //_Start_\n- `09:30` Coding\n- `10:00` Coding\n- `10:15` Email\n\n{}After",
                summary.render(&config, &at(10, 20))
            )
        );
    }

    #[test]
    fn test_summary_block_at_end_of_journal() {
        let config = config();
        let original = "- `09:00` //_Start_\n- `09:30` Coding";
        let mut doc = Document::from_text(original);
        let (summary, _) = summary_block(&mut doc, Selection::lines(0, 1), &config, at(9, 40)).unwrap();

        assert_eq!(summary.span("Coding").unwrap().span_minutes, 30);
        assert_eq!(doc.text(), format!("{}\n{}", original, summary.render(&config, &at(9, 40))));
    }

    #[test]
    fn test_summary_block_clamps_range() {
        let config = config();
        let mut doc = Document::from_text("- `09:00` //_Start_\n- `09:30` Coding");
        let (summary, _) = summary_block(&mut doc, Selection::lines(0, 40), &config, at(9, 40)).unwrap();
        assert_eq!(summary.counts.valid, 2);
    }

    #[test]
    fn test_check_line() {
        let config = config();
        let task = check_line("- `10:15` Email // inbox zero", &config).unwrap();
        assert_eq!(task.text, "Email");
        assert_eq!(task.comment, "inbox zero");
        assert!(check_line("- 10:15 Email", &config).is_err());
    }
}
