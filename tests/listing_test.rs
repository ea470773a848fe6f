use vee::mach::{Listing, MAX_LINE_LEN};
use vee::term::{load, save};

fn temp_file(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("vee-{}-{}", std::process::id(), name))
}

#[test]
fn test_save_load_round_trip() {
    let mut listing = Listing::default();
    for line in ["=V0 0", "while < V0 3", "  ++V0", "  print/1 V0"].iter() {
        listing.load_str(line).unwrap();
    }
    let path = temp_file("round-trip.vee");
    let filename = path.to_str().unwrap();
    save(&listing, filename).unwrap();
    let reloaded = load(filename).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(reloaded.source(), listing.source());
    assert_eq!(reloaded.lines(), listing.lines());
}

#[test]
fn test_load_missing_file() {
    let path = temp_file("no-such-file.vee");
    let error = load(path.to_str().unwrap()).unwrap_err();
    assert!(error.to_string().starts_with("FILE NOT FOUND"));
}

#[test]
fn test_line_length_cap() {
    let mut listing = Listing::default();
    let long = "1".repeat(MAX_LINE_LEN + 1);
    let error = listing.load_str(&long).unwrap_err();
    assert!(error.to_string().starts_with("LINE BUFFER OVERFLOW"));
    assert!(listing.is_empty());
}
