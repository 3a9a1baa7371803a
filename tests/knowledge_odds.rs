use holdem_sim::evaluator::Category::*;
use holdem_sim::history::{self, HistoryRecord, PhaseScores};
use holdem_sim::knowledge::{Knowledge, KnowledgeError};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("holdem-sim-{}-{name}", std::process::id()))
}

#[test]
fn prefix_lookup_averages_matching_keys() {
    let text = "\
0,0,1,1,1|20
0,1,1,1,1|40
0,1,2,2,1|60
1,1,1,1,0|90
";
    let k = Knowledge::parse(text.as_bytes()).unwrap();
    assert_eq!(k.len(), 4);
    assert_eq!(k.winning_odds(&[0]), Some(40.0));
    assert_eq!(k.winning_odds(&[0, 1]), Some(50.0));
    assert_eq!(k.winning_odds(&[0, 1, 2, 2, 1]), Some(60.0));
    assert_eq!(k.winning_odds(&[1, 1]), Some(90.0));
    assert_eq!(k.winning_odds(&[2]), None);
}

#[test]
fn blank_lines_are_skipped() {
    let k = Knowledge::parse("\n1,1,1,1,0|50\n\n".as_bytes()).unwrap();
    assert_eq!(k.len(), 1);
}

#[test]
fn history_and_knowledge_survive_files() {
    let records = vec![
        HistoryRecord::new(PhaseScores([Pair, Pair, TwoPair, TwoPair, HighCard]), true),
        HistoryRecord::new(PhaseScores([Pair, Pair, TwoPair, TwoPair, HighCard]), false),
        HistoryRecord::new(PhaseScores([HighCard, Pair, Pair, Straight, HighCard]), true),
    ];
    let records_path = temp_path("records.csv");
    history::save(&records_path, &records).unwrap();
    let text = std::fs::read_to_string(&records_path).unwrap();
    assert_eq!(text.lines().next(), Some("1,1,2,2,0,1"));
    let loaded = history::load(&records_path).unwrap();
    assert_eq!(loaded, records);

    let knowledge = Knowledge::from_records(&loaded);
    let knowledge_path = temp_path("knowledge.txt");
    knowledge.save(&knowledge_path).unwrap();
    let reloaded = Knowledge::load(&knowledge_path).unwrap();
    assert_eq!(reloaded, knowledge);
    assert_eq!(reloaded.get(&[1, 1, 2, 2, 0]), Some(50.0));
    assert_eq!(reloaded.winning_odds(&[0]), Some(100.0));

    std::fs::remove_file(records_path).ok();
    std::fs::remove_file(knowledge_path).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Knowledge::load(temp_path("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, KnowledgeError::Io(_)));
}
