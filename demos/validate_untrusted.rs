use pathgate::types::path::Path;
use pathgate::types::relative::RelativePath;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Candidate paths as they might arrive from an untrusted client.
    let payload = r#"["inbox/2024/report.pdf", "../../etc/passwd", "notes/../secret", "archive/..."]"#;
    let candidates: Vec<String> = serde_json::from_str(payload)?;

    let root = Path::new_unchecked("/srv/storage");
    for candidate in candidates {
        match RelativePath::new(candidate) {
            Ok(rel) => println!("allow {}", root.join(&rel)),
            Err(err) => println!("deny  {err}"),
        }
    }

    // Deserializing directly into the typed value enforces the same check
    // at the serde boundary.
    let direct: RelativePath = serde_json::from_str("\"uploads/cat.png\"")?;
    println!("typed {}", root.join(&direct));
    Ok(())
}
