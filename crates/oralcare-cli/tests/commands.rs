use oralcare_cli::commands::{Applied, Command, CommandError, apply};
use oralcare_core::error::CoreError;
use oralcare_core::teeth::ProbingSite;
use oralcare_core::wizard::{Page, Wizard};

fn parse(line: &str) -> Result<Command, CommandError> {
    line.parse()
}

#[test]
fn navigation_commands() {
    assert_eq!(parse("next").unwrap(), Command::Next);
    assert_eq!(parse(" N ").unwrap(), Command::Next);
    assert_eq!(parse("back").unwrap(), Command::Prev);
    assert_eq!(parse("goto 7").unwrap(), Command::Goto(Page::Summary));
    assert!(matches!(
        parse("goto 8"),
        Err(CommandError::Core(CoreError::InvalidPage(8)))
    ));
    assert!(matches!(parse("goto x"), Err(CommandError::InvalidNumber(_))));
}

#[test]
fn identity_commands_keep_the_rest_of_the_line() {
    assert_eq!(
        parse("name Hong Gil Dong").unwrap(),
        Command::Name("Hong Gil Dong".to_string())
    );
    assert_eq!(parse("chart").unwrap(), Command::ChartNumber(String::new()));
}

#[test]
fn score_commands() {
    assert_eq!(
        parse("plaque #16 3").unwrap(),
        Command::Plaque { tooth: 16, level: 3 }
    );
    assert_eq!(
        parse("perio 27 distal 6").unwrap(),
        Command::Perio {
            tooth: 27,
            site: ProbingSite::Distal,
            depth: "6".to_string()
        }
    );
    assert_eq!(
        parse("perio 27 mid").unwrap(),
        Command::Perio {
            tooth: 27,
            site: ProbingSite::Mid,
            depth: String::new()
        }
    );
    assert_eq!(parse("motor 1").unwrap(), Command::Motor(1));
}

#[test]
fn interdental_text_is_coerced() {
    assert_eq!(
        parse("interdental 16-17 abc").unwrap(),
        Command::Interdental {
            site: "16-17".to_string(),
            score: 0
        }
    );
    assert_eq!(
        parse("interdental #36-37 2").unwrap(),
        Command::Interdental {
            site: "#36-37".to_string(),
            score: 2
        }
    );
}

#[test]
fn malformed_commands() {
    assert!(matches!(parse("brush"), Err(CommandError::Unknown(_))));
    assert!(matches!(
        parse("plaque 16"),
        Err(CommandError::MissingArgument {
            command: "plaque",
            argument: "level"
        })
    ));
    assert!(matches!(parse("arch two"), Err(CommandError::InvalidNumber(_))));
    assert!(matches!(parse("perio 16 top 3"), Err(CommandError::InvalidSite(_))));
}

#[test]
fn apply_updates_assessment_on_any_page() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.page(), Page::Intro);

    let applied = apply(&mut wizard, parse("plaque 44 2").unwrap()).unwrap();
    assert_eq!(applied, Applied::Updated("plaque #44 = 2".to_string()));
    apply(&mut wizard, parse("perio 16 mesial 5").unwrap()).unwrap();
    apply(&mut wizard, parse("interdental 46-47 3").unwrap()).unwrap();

    let a = wizard.assessment();
    assert_eq!(a.plaque.scores[5], 2);
    assert_eq!(a.perio.depths[0], "5");
    assert_eq!(a.interdental.scores[3], 3);
    assert_eq!(wizard.page(), Page::Intro);
}

#[test]
fn apply_rejects_unknown_teeth() {
    let mut wizard = Wizard::new();
    let err = apply(&mut wizard, parse("plaque 11 2").unwrap()).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Core(CoreError::UnknownTooth { tooth: 11, .. })
    ));
    let err = apply(&mut wizard, parse("interdental 11-12 1").unwrap()).unwrap_err();
    assert!(matches!(err, CommandError::Core(CoreError::UnknownSite(_))));
}

#[test]
fn apply_navigation() {
    let mut wizard = Wizard::new();
    apply(&mut wizard, Command::Next).unwrap();
    assert_eq!(wizard.page(), Page::PatientInfo);
    apply(&mut wizard, Command::Goto(Page::Summary)).unwrap();
    assert!(wizard.is_finalized());
    apply(&mut wizard, Command::Restart).unwrap();
    assert_eq!(wizard.page(), Page::Intro);
}

#[test]
fn export_is_offered_only_on_the_summary_page() {
    let mut wizard = Wizard::new();
    let err = apply(&mut wizard, Command::Export).unwrap_err();
    assert!(matches!(err, CommandError::NotFinalized));

    apply(&mut wizard, Command::Goto(Page::Summary)).unwrap();
    assert_eq!(apply(&mut wizard, Command::Export).unwrap(), Applied::Export);
}
