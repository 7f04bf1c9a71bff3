//! Shared fixtures for unit tests.

use crate::config::models::AppConfig;
use crate::output::OutputFormat;
use sphinxdex::engine::config::SearchOptions;
use std::path::{Path, PathBuf};

pub const SAMPLE_INDEX: &str = concat!(
    "Search.setIndex({docnames:[\"api\",\"tutorial\"],",
    "envversion:{\"sphinx.domains.python\":3,sphinx:56},",
    "filenames:[\"api.rst\",\"tutorial.rst\"],",
    "objects:{\"\":{pyrexMD:[0,0,0,\"-\"]},",
    "\"pyrexMD.gmx\":{grompp:[0,1,1,\"\"],mdrun:[0,1,1,\"\"]}},",
    "objnames:{\"0\":[\"py\",\"module\",\"Python module\"],\"1\":[\"py\",\"function\",\"Python function\"]},",
    "objtypes:{\"0\":\"py:module\",\"1\":\"py:function\"},",
    "terms:{exchang:1,gromac:[0,1],grompp:0,mdrun:0,replica:1,setup:[0,1]},",
    "titles:[\"API Reference\",\"Replica Exchange Tutorial\"],",
    "titleterms:{api:0,exchang:1,refer:0,replica:1,tutori:1}})",
);

pub fn write_index(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn config_for(index_path: PathBuf) -> AppConfig {
    AppConfig {
        index_path,
        file_suffix: ".html".to_string(),
        format: OutputFormat::Plain,
        limit: None,
        search: SearchOptions::default(),
    }
}
