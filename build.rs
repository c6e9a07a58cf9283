use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct LexiconData {
    titles: HashMap<String, String>,
    extended_titles: HashMap<String, String>,
    suffixes: HashMap<String, String>,
    extended_suffixes: HashMap<String, String>,
    prefixes: HashMap<String, String>,
    extended_prefixes: HashMap<String, String>,
    conjunctions: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/lexicon_data.json")?;
    let data: LexiconData = serde_json::from_str(&json)?;

    // Titles and suffixes are looked up with one trailing period removed,
    // so the keys must be stored the same way
    let titles = strip_key_periods(&data.titles)?;
    let suffixes = strip_key_periods(&data.suffixes)?;
    let extended_titles = strip_key_periods(&data.extended_titles)?;
    let extended_suffixes = strip_key_periods(&data.extended_suffixes)?;

    write_map(&output.join("titles.rs"), &titles)?;
    write_map(
        &output.join("extended_titles.rs"),
        &merged(&titles, &extended_titles),
    )?;

    write_map(&output.join("suffixes.rs"), &suffixes)?;
    write_map(
        &output.join("extended_suffixes.rs"),
        &merged(&suffixes, &extended_suffixes),
    )?;

    let prefixes = lowercase_keys(&data.prefixes)?;
    let extended_prefixes = lowercase_keys(&data.extended_prefixes)?;
    write_map(&output.join("prefixes.rs"), &prefixes)?;
    write_map(
        &output.join("extended_prefixes.rs"),
        &merged(&prefixes, &extended_prefixes),
    )?;

    write_set(&output.join("conjunctions.rs"), &data.conjunctions)?;

    Ok(())
}

fn strip_key_periods(map: &HashMap<String, String>) -> Result<BTreeMap<String, String>> {
    let lowercased = lowercase_keys(map)?;
    let mut result = BTreeMap::new();
    for (k, v) in lowercased {
        let key = k.strip_suffix('.').unwrap_or(&k).to_string();
        let value = v.strip_suffix('.').unwrap_or(&v).to_string();
        if result.insert(key.clone(), value).is_some() {
            return Err(format!("duplicate lexicon key {:?}", key).into());
        }
    }
    Ok(result)
}

fn lowercase_keys(map: &HashMap<String, String>) -> Result<BTreeMap<String, String>> {
    let mut result = BTreeMap::new();
    for (k, v) in map {
        if result.insert(k.to_lowercase(), v.clone()).is_some() {
            return Err(format!("duplicate lexicon key {:?}", k).into());
        }
    }
    Ok(result)
}

fn merged(
    base: &BTreeMap<String, String>,
    extension: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut result = base.clone();
    result.extend(extension.iter().map(|(k, v)| (k.clone(), v.clone())));
    result
}

fn write_map(output: &Path, map: &BTreeMap<String, String>) -> Result<()> {
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.as_str(), &format!("{:?}", v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    let mut seen = BTreeMap::new();
    for v in set {
        let v = v.to_lowercase();
        if seen.insert(v.clone(), ()).is_none() {
            builder.entry(v);
        }
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
