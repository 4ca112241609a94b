#[cfg(test)]
mod tests {
    use polls::{PollConfig, PollManager, PollResults, VoterPolicy};
    use crate::scenario::{self, DemoOptions, OutputFormat};
    use clap::{error::ErrorKind, Parser};

    const EXPECTED: [&str; 10] = [
        "Poll created with ID: 1",
        "Vote cast successfully.",
        "Vote cast successfully.",
        "User has already voted.",
        "Poll results for poll ID 1 : [(Red, 1), (Blue, 1), (Green, 0), (Yellow, 0)]",
        "Poll updated successfully.",
        "Vote cast successfully.",
        "Updated poll results for poll ID 1 : [(Red, 0), (Blue, 0), (Yellow, 1)]",
        "Poll deleted successfully.",
        "Poll not found.",
    ];

    #[test]
    fn test_text_transcript() {
        let mut manager = PollManager::new();
        let transcript = scenario::run(&mut manager, OutputFormat::Text).unwrap();
        assert_eq!(transcript, EXPECTED);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_transcript_same_under_reset_policy() {
        let config = PollConfig::default().with_voter_policy(VoterPolicy::ResetOnUpdate);
        let mut manager = PollManager::with_config(config);
        assert_eq!(scenario::run(&mut manager, OutputFormat::Text).unwrap(), EXPECTED);
    }

    #[test]
    fn test_json_transcript() {
        let mut manager = PollManager::new();
        let transcript = scenario::run(&mut manager, OutputFormat::Json).unwrap();
        assert_eq!(transcript.len(), EXPECTED.len());

        let prefix = "Updated poll results for poll ID 1 : ";
        let json = transcript[7].strip_prefix(prefix).unwrap();
        let results: PollResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.question, "What is your favorite primary color?");
        assert_eq!(results.pairs(), [("Red", 0_u32), ("Blue", 0), ("Yellow", 1)]);
        assert_eq!(results.total_votes, 1);
        assert_eq!(transcript[9], "Poll not found.");
    }

    #[test]
    fn test_second_run_gets_fresh_id() {
        let mut manager = PollManager::new();
        scenario::run(&mut manager, OutputFormat::Text).unwrap();
        let transcript = scenario::run(&mut manager, OutputFormat::Text).unwrap();
        assert_eq!(transcript[0], "Poll created with ID: 2");
    }

    #[test]
    fn test_parse_args() {
        let options = DemoOptions::try_parse_from(["poll-demo"]).unwrap();
        assert_eq!(options.format, OutputFormat::Text);

        let options = DemoOptions::try_parse_from(["poll-demo", "--format", "json"]).unwrap();
        assert_eq!(options.format, OutputFormat::Json);

        let err = DemoOptions::try_parse_from(["poll-demo", "--format", "yaml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = DemoOptions::try_parse_from(["poll-demo", "--json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
