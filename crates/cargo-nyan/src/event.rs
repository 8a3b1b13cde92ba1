use serde::Deserialize;

/// One line of the libtest `--format json` stream, discriminated by `"type"`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Suite(SuiteEvent),
    Test(TestEvent),
}

/// Suite lifecycle: `started` carries the count of tests about to run; the
/// closing `ok`/`failed` carries totals we already track ourselves.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SuiteEvent {
    Started { test_count: usize },
    Ok {},
    Failed {},
}

/// Per-test outcomes. `ignored` feeds the reporter's pending bucket.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TestEvent {
    Started {
        name: String,
    },
    Ok {
        name: String,
    },
    Failed {
        name: String,
        #[serde(default)]
        stdout: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
    Ignored {
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suite_started() {
        let event: Event =
            serde_json::from_str(r#"{"type":"suite","event":"started","test_count":12}"#).unwrap();
        match event {
            Event::Suite(SuiteEvent::Started { test_count }) => assert_eq!(test_count, 12),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn parses_failed_test_with_optional_fields() {
        let line = r#"{"type":"test","event":"failed","name":"math::adds","exec_time":0.01,"stdout":"left: 2\nright: 3\n"}"#;
        let event: Event = serde_json::from_str(line).unwrap();
        match event {
            Event::Test(TestEvent::Failed {
                name,
                stdout,
                message,
            }) => {
                assert_eq!(name, "math::adds");
                assert!(stdout.unwrap().contains("left: 2"));
                assert!(message.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn parses_ignored_test_and_suite_close() {
        let event: Event =
            serde_json::from_str(r#"{"type":"test","event":"ignored","name":"slow_one"}"#).unwrap();
        assert!(matches!(
            event,
            Event::Test(TestEvent::Ignored { ref name }) if name == "slow_one"
        ));

        let event: Event = serde_json::from_str(
            r#"{"type":"suite","event":"ok","passed":3,"failed":0,"ignored":1,"exec_time":0.2}"#,
        )
        .unwrap();
        assert!(matches!(event, Event::Suite(SuiteEvent::Ok {})));
    }
}
