use crate::cli::ExportArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use sphinxdex::engine::loader::{self, Encoding};
use tracing::info;

pub fn run(args: ExportArgs, config: &AppConfig) -> Result<()> {
    let index = super::load_index(config)?;
    let encoding = if args.json {
        Encoding::Json
    } else {
        Encoding::SetIndex
    };

    loader::save_path(&index, &args.output, encoding)?;
    info!("Exported search index to {:?} as {:?}.", args.output, encoding);
    println!(
        "✅ Wrote {} documents and {} objects to {}",
        index.documents().len(),
        index.objects().len(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SAMPLE_INDEX, config_for, write_index};

    #[test]
    fn export_round_trips_in_both_encodings() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_index(dir.path(), "searchindex.js", SAMPLE_INDEX);
        let config = config_for(source);
        let original = loader::load(SAMPLE_INDEX).unwrap();

        let js = dir.path().join("out.js");
        run(
            ExportArgs {
                output: js.clone(),
                json: false,
            },
            &config,
        )
        .unwrap();
        let text = std::fs::read_to_string(&js).unwrap();
        assert!(text.starts_with("Search.setIndex({"));
        assert_eq!(loader::load(&text).unwrap().to_raw(), original.to_raw());

        let json = dir.path().join("out.json");
        run(
            ExportArgs {
                output: json.clone(),
                json: true,
            },
            &config,
        )
        .unwrap();
        let text = std::fs::read_to_string(&json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["docnames"][1], "tutorial");
        assert_eq!(loader::load(&text).unwrap().to_raw(), original.to_raw());
    }
}
