//! `install.inf` generation
//!
//! The descriptor copies the cursor files into `%WINDIR%\Cursors\<dir>` and
//! registers a scheme under `HKCU\Control Panel\Cursors\Schemes` whose value
//! lists one path per included slot. Right-clicking the file and choosing
//! "Install" is all a user needs to do.

use anyhow::Result;
use std::collections::HashSet;

use super::file::CursorFile;
use super::store::{CursorStore, KeyValueStore};

/// Directory name used inside the package and under `Cursors\`
pub fn effective_dir_name<'a>(pack_name: &'a str, dir_name: &'a str) -> &'a str {
    if dir_name.is_empty() {
        pack_name
    } else {
        dir_name
    }
}

/// Filenames in first-seen order, each once
pub fn unique_filenames(files: &[CursorFile]) -> Vec<&str> {
    let mut seen = HashSet::new();
    files
        .iter()
        .map(|f| f.filename.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Render the descriptor for an already-selected set of files
pub fn generate(files: &[CursorFile], pack_name: &str, dir_name: &str) -> String {
    let dir_name = effective_dir_name(pack_name, dir_name);

    let placeholders = files
        .iter()
        .map(|f| format!(r"%10%\%CUR_DIR%\%{}%", f.slot))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines: Vec<String> = vec![
        "[Version]".to_string(),
        r#"signature="$CHICAGO$""#.to_string(),
        String::new(),
        "[DefaultInstall]".to_string(),
        "CopyFiles = Scheme.Cur".to_string(),
        "AddReg    = Scheme.Reg".to_string(),
        String::new(),
        "[DestinationDirs]".to_string(),
        r#"Scheme.Cur = 10,"%CUR_DIR%""#.to_string(),
        String::new(),
        "[Scheme.Reg]".to_string(),
        format!(
            r#"HKCU,"Control Panel\Cursors\Schemes","%SCHEME_NAME%",,"{}""#,
            placeholders
        ),
        String::new(),
        "; -- Common Information".to_string(),
        String::new(),
        "[Scheme.Cur]".to_string(),
    ];

    lines.extend(unique_filenames(files).into_iter().map(|name| format!("\"{}\"", name)));

    lines.push(String::new());
    lines.push("[Strings]".to_string());
    lines.push(format!(r#"CUR_DIR = "Cursors\{}""#, dir_name));
    lines.push(format!(r#"SCHEME_NAME = "{}""#, pack_name));
    lines.extend(
        files
            .iter()
            .map(|f| format!("{} = \"{}\"", f.slot, f.filename)),
    );

    lines.join("\n")
}

/// Render the descriptor for the store's current cursor set
pub fn render<S: KeyValueStore>(
    store: &CursorStore<S>,
    pack_name: &str,
    dir_name: &str,
    apply_enabled_filter: bool,
) -> Result<String> {
    let files = store.list_populated(apply_enabled_filter)?;
    Ok(generate(&files, pack_name, dir_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::slots::CursorSlot;
    use crate::scheme::store::MemoryStore;

    fn file(slot: CursorSlot, filename: &str) -> CursorFile {
        CursorFile {
            filename: filename.to_string(),
            slot,
            base64_data: "data:,AA==".to_string(),
            ..Default::default()
        }
    }

    /// Lines between a section header and the next blank line
    fn section<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
        text.lines()
            .skip_while(|l| *l != header)
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_effective_dir_name() {
        assert_eq!(effective_dir_name("MyPack", ""), "MyPack");
        assert_eq!(effective_dir_name("MyPack", "my_pack"), "my_pack");
    }

    #[test]
    fn test_full_output() {
        let files = vec![
            file(CursorSlot::Pointer, "arrow.cur"),
            file(CursorSlot::Busy, "hourglass.ani"),
        ];

        let expected = r#"[Version]
signature="$CHICAGO$"

[DefaultInstall]
CopyFiles = Scheme.Cur
AddReg    = Scheme.Reg

[DestinationDirs]
Scheme.Cur = 10,"%CUR_DIR%"

[Scheme.Reg]
HKCU,"Control Panel\Cursors\Schemes","%SCHEME_NAME%",,"%10%\%CUR_DIR%\%pointer%,%10%\%CUR_DIR%\%busy%"

; -- Common Information

[Scheme.Cur]
"arrow.cur"
"hourglass.ani"

[Strings]
CUR_DIR = "Cursors\MyPack"
SCHEME_NAME = "MyPack"
pointer = "arrow.cur"
busy = "hourglass.ani""#;

        assert_eq!(generate(&files, "MyPack", ""), expected);
    }

    #[test]
    fn test_empty_files() {
        let text = generate(&[], "Empty", "");

        assert_eq!(
            section(&text, "[Scheme.Reg]"),
            vec![r#"HKCU,"Control Panel\Cursors\Schemes","%SCHEME_NAME%",,"""#]
        );
        assert!(section(&text, "[Scheme.Cur]").is_empty());
        assert_eq!(
            section(&text, "[Strings]"),
            vec![r#"CUR_DIR = "Cursors\Empty""#, r#"SCHEME_NAME = "Empty""#]
        );
        assert!(text.ends_with(r#"SCHEME_NAME = "Empty""#));
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn test_dedup_copy_section_keeps_string_lines() {
        let files = vec![
            file(CursorSlot::Pointer, "shared.cur"),
            file(CursorSlot::Text, "shared.cur"),
        ];
        let text = generate(&files, "Pack", "");

        assert_eq!(section(&text, "[Scheme.Cur]"), vec!["\"shared.cur\""]);
        let strings = section(&text, "[Strings]");
        assert!(strings.contains(&r#"pointer = "shared.cur""#));
        assert!(strings.contains(&r#"text = "shared.cur""#));
    }

    #[test]
    fn test_strings_match_placeholders() {
        let files = vec![
            file(CursorSlot::Help, "help.cur"),
            file(CursorSlot::Dgn1, "d1.cur"),
            file(CursorSlot::Person, "person.ani"),
        ];
        let text = generate(&files, "Pack", "dir");

        let reg_line = section(&text, "[Scheme.Reg]")[0];
        let quoted = reg_line.rsplit(",,").next().unwrap().trim_matches('"');
        let reg_slots: Vec<&str> = quoted
            .split(',')
            .map(|p| p.trim_start_matches(r"%10%\%CUR_DIR%\%").trim_end_matches('%'))
            .collect();

        let string_slots: Vec<&str> = section(&text, "[Strings]")
            .into_iter()
            .skip(2)
            .map(|l| l.split(" = ").next().unwrap())
            .collect();

        assert_eq!(reg_slots, vec!["help", "dgn1", "person"]);
        assert_eq!(reg_slots, string_slots);
    }

    #[test]
    fn test_explicit_dir_name() {
        let text = generate(&[], "My Pack", "mypack");
        assert!(text.contains(r#"CUR_DIR = "Cursors\mypack""#));
        assert!(text.contains(r#"SCHEME_NAME = "My Pack""#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut store = CursorStore::new(MemoryStore::new());
        store.put(&file(CursorSlot::Pointer, "arrow.cur")).unwrap();
        store.put(&file(CursorSlot::Busy, "hourglass.ani")).unwrap();

        let first = render(&store, "MyPack", "", true).unwrap();
        let second = render(&store, "MyPack", "", true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_respects_enabled_filter() {
        let mut store = CursorStore::new(MemoryStore::new());
        store.put(&file(CursorSlot::Pointer, "arrow.cur")).unwrap();
        store.put(&file(CursorSlot::Help, "help.cur")).unwrap();
        store.set_enabled(CursorSlot::Help, false).unwrap();

        let filtered = render(&store, "Pack", "", true).unwrap();
        assert!(!filtered.contains("help"));

        let unfiltered = render(&store, "Pack", "", false).unwrap();
        assert!(unfiltered.contains(r#"help = "help.cur""#));
        assert!(unfiltered.contains(r"%10%\%CUR_DIR%\%help%"));
    }
}
