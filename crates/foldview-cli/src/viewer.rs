//! Viewer page generation.
//!
//! Rendering is delegated entirely to the 3Dmol.js widget: this module only
//! writes a self-contained HTML page that feeds it the predicted structure
//! with the same style the reference front-end used (cartoon colored by
//! spectrum, white background, zoomed and spinning).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>foldview - predicted structure</title>
<script src="https://3dmol.org/build/3Dmol-min.js"></script>
<style>
  body { margin: 0; background: white; }
  #structure { width: 800px; height: 500px; position: relative; margin: 2em auto; }
</style>
</head>
<body>
<div id="structure"></div>
<script>
  const viewer = $3Dmol.createViewer(document.getElementById("structure"), {
    backgroundColor: "white",
  });
  viewer.addModel(__PDB_MODEL__, "pdb");
  viewer.setStyle({}, { cartoon: { color: "spectrum" } });
  viewer.zoomTo();
  viewer.zoom(2, 800);
  viewer.spin(true);
  viewer.render();
</script>
</body>
</html>
"#;

/// Write a viewer page for `pdb_text` at `path`.
///
/// The structure text is embedded as a JSON string literal so newlines and
/// quotes survive the trip into JavaScript.
pub fn write_page(path: &Path, pdb_text: &str) -> Result<()> {
    let model = serde_json::to_string(pdb_text).context("could not encode the structure text")?;
    let page = PAGE_TEMPLATE.replace("__PDB_MODEL__", &model);
    fs::write(path, page).with_context(|| format!("could not write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
