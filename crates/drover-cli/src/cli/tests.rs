#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_build_parses_shared_flags() {
        let cli = Cli::try_parse_from([
            "drover",
            "build",
            "--fail-on-severe",
            "--delete-conflicting-outputs",
            "-c",
            "release",
            "-o",
            "out",
            "-v",
        ])
        .unwrap();

        let Command::Build(args) = cli.command else {
            panic!("expected build subcommand");
        };
        assert!(args.shared.fail_on_severe);
        assert!(args.shared.delete_conflicting_outputs);
        assert!(!args.shared.assume_tty);
        assert_eq!(args.shared.config.as_deref(), Some("release"));
        assert_eq!(args.shared.output, Some(PathBuf::from("out")));
        assert!(args.shared.verbose);
    }

    #[test]
    fn test_serve_defaults_hostname_and_collects_targets() {
        let cli = Cli::try_parse_from(["drover", "serve", "web:9000", "api"]).unwrap();

        let Command::Serve(args) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(args.hostname, "localhost");
        assert_eq!(args.targets, vec!["web:9000", "api"]);
    }

    #[test]
    fn test_serve_hostname_flag() {
        let cli = Cli::try_parse_from(["drover", "serve", "--hostname", "0.0.0.0"]).unwrap();

        let Command::Serve(args) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(args.hostname, "0.0.0.0");
        assert!(args.targets.is_empty());
    }

    #[test]
    fn test_test_forwards_trailing_tokens_verbatim() {
        let cli = Cli::try_parse_from([
            "drover",
            "test",
            "--fail-on-severe",
            "--",
            "-p",
            "chrome",
            "--name",
            "parser",
        ])
        .unwrap();

        let Command::Test(args) = cli.command else {
            panic!("expected test subcommand");
        };
        assert!(args.shared.fail_on_severe);
        assert_eq!(args.runner_args, vec!["-p", "chrome", "--name", "parser"]);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["drover", "deploy"]).is_err());
    }

    #[test]
    fn test_shared_accessor_covers_every_mode() {
        for mode in ["build", "watch", "serve", "test"] {
            let cli = Cli::try_parse_from(["drover", mode, "--low-resources-mode"]).unwrap();
            assert!(cli.command.shared().low_resources_mode, "mode: {mode}");
        }
    }
}
