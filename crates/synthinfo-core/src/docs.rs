//! HTML help fragments and Markdown reference documents.
//!
//! Rendering is a pure function of the registry contents and walks entries in
//! registration order, so output is stable between runs. Replacement aliases
//! and studio definitions are never documented.

use serde::{Deserialize, Serialize};

use crate::args::OrderedMap;
use crate::catalog::fx::user_facing_name;
use crate::catalog::SampleGroup;
use crate::definition::{ArgInfo, DefinitionKind, InstrumentDefinition};
use crate::registry::Registry;

/// Font face used throughout the HTML fragments.
pub const DEFAULT_FONT_FACE: &str = "HelveticaNeue-Light,Helvetica Neue Light,Helvetica Neue";

/// Name/default pairs per row in the argument grid.
pub const DEFAULT_GRID_COLUMNS: usize = 6;

/// The player whose arguments are documented alongside samples.
const SAMPLE_PLAYER: &str = "stereo_player";

const MODULATABLE: &str = "May be changed whilst playing";
const FIXED: &str = "Can not be changed once set";
const MISSING_DOC: &str = "write me";

/// HTML styling options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Value of every `face` attribute.
    pub font_face: String,
    /// Name/default pairs per grid row.
    pub grid_columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_face: DEFAULT_FONT_FACE.to_string(),
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

/// One HTML fragment and the user-facing key it documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlDoc {
    pub key: String,
    pub html: String,
}

/// Both renderings of one catalog section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocs {
    /// HTML fragments in registration order.
    pub html: Vec<HtmlDoc>,
    /// The full Markdown document.
    pub markdown: String,
}

impl RenderedDocs {
    /// The HTML fragment for a user-facing key.
    pub fn html_for(&self, key: &str) -> Option<&str> {
        self.html
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.html.as_str())
    }
}

/// Synth docs from the global registry with default styling.
pub fn render_synth_docs() -> RenderedDocs {
    DocRenderer::new(Registry::global()).synths()
}

/// FX docs from the global registry with default styling.
pub fn render_fx_docs() -> RenderedDocs {
    DocRenderer::new(Registry::global()).fx()
}

/// Sample docs from the global registry with default styling.
pub fn render_sample_docs() -> RenderedDocs {
    DocRenderer::new(Registry::global()).samples()
}

/// Renders documentation for one registry.
#[derive(Debug, Clone)]
pub struct DocRenderer<'a> {
    registry: &'a Registry,
    options: RenderOptions,
}

impl<'a> DocRenderer<'a> {
    /// Creates a renderer with default options.
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            options: RenderOptions::default(),
        }
    }

    /// Replaces the styling options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Renders the synth section.
    pub fn synths(&self) -> RenderedDocs {
        self.render(DefinitionKind::Synth, "Synths")
    }

    /// Renders the FX section.
    pub fn fx(&self) -> RenderedDocs {
        self.render(DefinitionKind::Fx, "FX")
    }

    /// Renders the sample section.
    pub fn samples(&self) -> RenderedDocs {
        let player = self.registry.get(SAMPLE_PLAYER).map(|d| d.arg_info());
        let html = self
            .registry
            .grouped_samples()
            .iter()
            .map(|group| HtmlDoc {
                key: group.desc.clone(),
                html: self.sample_group_html(group, player.as_ref()),
            })
            .collect();

        let mut markdown = String::from("# Samples\n\n");
        for group in self.registry.grouped_samples() {
            markdown.push_str(&format!("## {}\n", group.desc));
            for sample in &group.samples {
                markdown.push_str(&format!("* :{}\n", sample));
            }
            markdown.push_str("\n\n");
        }

        RenderedDocs { html, markdown }
    }

    /// Documented definitions of `kind` paired with their user-facing keys.
    fn documented(&self, kind: DefinitionKind) -> Vec<(String, &InstrumentDefinition)> {
        self.registry
            .entries()
            .iter()
            .filter(|e| !e.is_replacement() && e.definition().kind() == kind)
            .map(|e| {
                let key = match kind {
                    DefinitionKind::Fx => user_facing_name(e.key()).to_string(),
                    _ => e.key().to_string(),
                };
                (key, e.definition().as_ref())
            })
            .collect()
    }

    fn render(&self, kind: DefinitionKind, title: &str) -> RenderedDocs {
        let documented = self.documented(kind);
        let html = documented
            .iter()
            .map(|(key, def)| HtmlDoc {
                key: key.clone(),
                html: self.definition_html(key, def),
            })
            .collect();
        let markdown = markdown_document(title, &documented);
        RenderedDocs { html, markdown }
    }

    fn title(&self, text: &str) -> String {
        let face = &self.options.font_face;
        let text = escape(text);
        format!("<font size=\"7\" face=\"{face}\">{text}</font>\n")
    }

    fn definition_html(&self, key: &str, def: &InstrumentDefinition) -> String {
        let info = def.arg_info();
        let mut html = self.title(def.name());
        match def.kind() {
            DefinitionKind::Fx => {
                html.push_str(&format!(
                    "<h2><pre><font color=\"#3C3C3C\">with_fx <font color=\"DeepPink\">:{}</font> \
                     <font color=\"DarkOrange\">do</font><br/>  play \
                     <font color=\"DodgerBlue\">50</font><br/>\
                     <font color=\"DarkOrange\">end</font></font></pre></h2>\n",
                    key
                ));
            }
            _ => {
                html.push_str(&format!(
                    "<h2><font color=\"#3C3C3C\"><pre>use_synth \
                     <font color=\"DeepPink\">:{}</font></pre></font></h2>\n",
                    key
                ));
            }
        }
        html.push_str(&self.arg_grid(&info));
        html.push_str(&format!(
            "<p><font size=\"5\" face=\"{}\">  {}</font></p>\n",
            self.options.font_face,
            escape(def.doc())
        ));
        html.push_str(&self.arg_table(&info));
        html
    }

    fn sample_group_html(
        &self,
        group: &SampleGroup,
        player: Option<&OrderedMap<ArgInfo>>,
    ) -> String {
        let mut html = self.title(&group.desc);
        if let Some(info) = player {
            html.push_str(&self.arg_grid(info));
        }
        html.push_str("<table cellpadding=\"2\">\n");
        for sample in &group.samples {
            html.push_str(&format!(
                "  <tr><td bgcolor=\"white\"><h2><pre><font color=\"#3C3C3C\"> sample</font> \
                 <font color=\"DeepPink\">:{}</font></pre></h2></td></tr>\n",
                sample
            ));
        }
        html.push_str("</table>\n");
        if let Some(info) = player {
            html.push_str(&self.arg_table(info));
        }
        html
    }

    /// Name/default grid, alternating dark and light cells.
    fn arg_grid(&self, info: &OrderedMap<ArgInfo>) -> String {
        let columns = self.options.grid_columns.max(1);
        let mut grid = String::from("<table cellpadding=\"2\">\n <tr>");
        for (i, (arg, av)) in info.iter().enumerate() {
            if i % columns == 0 {
                grid.push_str("</tr><tr>");
            }
            let (bg, fg) = if i % 2 == 0 {
                ("#5e5e5e", "white")
            } else {
                ("#E8E8E8", "#5e5e5e")
            };
            let default = escape(&av.default.to_string());
            grid.push_str(&format!(
                "<td bgcolor=\"{bg}\">\n  <pre><h4><font color=\"{fg}\">{arg}: </font></h4></pre>\n\
                 </td>\n<td bgcolor=\"{bg}\">\n  <pre><h4>\
                 <font color=\"{fg}\">{default}</font></h4></pre>\n</td>\n"
            ));
        }
        grid.push_str("</tr></table>\n");
        grid
    }

    /// Per-argument detail rows. The first row uses the odd colours.
    fn arg_table(&self, info: &OrderedMap<ArgInfo>) -> String {
        let face = &self.options.font_face;
        let mut table = String::from("<table cellpadding=\"10\">\n<tr><th></th><th></th></tr>\n");
        for (i, (arg, av)) in info.iter().enumerate() {
            let (bg, key_bg) = if (i + 1) % 2 == 0 {
                ("#F8F8F8", "#FFF0F5")
            } else {
                ("#E8E8E8", "#FFE4E1")
            };
            let doc = escape(doc_or_placeholder(av));
            let default = escape(&av.default.to_string());
            table.push_str(&format!("  <tr bgcolor=\"{}\">\n", bg));
            table.push_str(&format!(
                "    <td bgcolor=\"{}\"><h3><pre> {}:</pre></h3></td>\n",
                key_bg, arg
            ));
            table.push_str("      <td>\n");
            table.push_str(&format!("        <font size=\"4\" face=\"{}\">\n", face));
            table.push_str(&format!("          {}<br/></font>\n", doc));
            table.push_str(&format!(
                "          <font size=\"3\" face=\"{}\">Default: {}<br/>\n",
                face, default
            ));
            if !av.constraints.is_empty() {
                let constraints = escape(&av.constraints.join(","));
                table.push_str(&format!("          {}<br/>\n", constraints));
            }
            table.push_str(&format!("          {}\n", mutability(av)));
            table.push_str("       </font>\n");
            table.push_str("     </td>\n");
            table.push_str(" </tr>\n");
        }
        table.push_str("  </table>\n");
        table
    }
}

fn markdown_document(title: &str, documented: &[(String, &InstrumentDefinition)]) -> String {
    let mut md = format!("# {}\n\n", title);
    for (_, def) in documented {
        let name = def.name();
        md.push_str(&format!("* [{}](#{})\n", name, anchor(name)));
    }
    md.push('\n');

    for (key, def) in documented {
        md.push_str(&format!("## {}\n\n", def.name()));
        md.push_str(&format!("### Key:\n  :{}\n\n", key));
        md.push_str(&format!("### Doc:\n  {}\n\n", def.doc()));
        md.push_str("### Arguments:\n");
        for (arg, av) in def.arg_info().iter() {
            let constraints = if av.constraints.is_empty() {
                "none".to_string()
            } else {
                av.constraints.join(",")
            };
            md.push_str(&format!("  * {}:\n", arg));
            md.push_str(&format!("    - doc: {}\n", doc_or_placeholder(av)));
            md.push_str(&format!("    - default: {}\n", av.default));
            md.push_str(&format!("    - constraints: {}\n", constraints));
            md.push_str(&format!("    - {}\n\n", mutability(av)));
        }
        md.push_str("\n\n");
    }
    md
}

/// Markdown heading anchor for a display name.
pub fn anchor(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

fn doc_or_placeholder(info: &ArgInfo) -> &str {
    if info.doc.is_empty() {
        MISSING_DOC
    } else {
        &info.doc
    }
}

fn mutability(info: &ArgInfo) -> &'static str {
    if info.modulatable {
        MODULATABLE
    } else {
        FIXED
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSpec;
    use crate::rules;
    use pretty_assertions::assert_eq;

    fn small_registry() -> Registry {
        let mut registry = Registry::new();
        let def = InstrumentDefinition::fx("fx_wobble")
            .name("Wobble Box")
            .synth_name("fx_wobble")
            .doc("Wobbles things.")
            .arg("amp", 1)
            .arg("depth", 0.5)
            .param(
                "depth",
                ParamSpec::new("")
                    .rule(rules::non_negative("depth"))
                    .rule(rules::less_than("depth", 2.0)),
            )
            .build()
            .unwrap();
        registry.register(def).unwrap();
        registry
            .alias("fx_replace_wobble", "fx_wobble", true)
            .unwrap();
        registry
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("TB-303 Emulation"), "tb-303-emulation");
        assert_eq!(anchor("Dull Bell"), "dull-bell");
    }

    #[test]
    fn test_fx_markdown_layout() {
        let registry = small_registry();
        let docs = DocRenderer::new(&registry).fx();
        let expected = concat!(
            "# FX\n\n",
            "* [Wobble Box](#wobble-box)\n",
            "\n",
            "## Wobble Box\n\n",
            "### Key:\n  :wobble\n\n",
            "### Doc:\n  Wobbles things.\n\n",
            "### Arguments:\n",
            "  * amp:\n",
            "    - doc: The amplitude of the sound. Typically a value between 0 and 1. Higher amplitudes may be used, but won't make the sound louder, it will just reduce the quality of all the sounds currently being played (due to compression.)\n",
            "    - default: 1\n",
            "    - constraints: must be zero or greater\n",
            "    - May be changed whilst playing\n\n",
            "  * depth:\n",
            "    - doc: write me\n",
            "    - default: 0.5\n",
            "    - constraints: must be zero or greater,must be a value less than 2\n",
            "    - Can not be changed once set\n\n",
            "\n\n",
        );
        assert_eq!(docs.markdown, expected);
    }

    #[test]
    fn test_replacement_alias_not_documented() {
        let registry = small_registry();
        let docs = DocRenderer::new(&registry).fx();
        let keys: Vec<_> = docs.html.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["wobble"]);
        assert!(docs.html_for("replace_wobble").is_none());
    }

    #[test]
    fn test_fx_html_header_and_rows() {
        let registry = small_registry();
        let docs = DocRenderer::new(&registry).fx();
        let html = docs.html_for("wobble").unwrap();
        assert!(html.starts_with(
            "<font size=\"7\" face=\"HelveticaNeue-Light,Helvetica Neue Light,Helvetica Neue\">Wobble Box</font>\n"
        ));
        assert!(html.contains("with_fx <font color=\"DeepPink\">:wobble</font>"));
        assert!(html.contains("  <tr bgcolor=\"#E8E8E8\">\n    <td bgcolor=\"#FFE4E1\"><h3><pre> amp:</pre></h3></td>"));
        assert!(html.contains("  <tr bgcolor=\"#F8F8F8\">\n    <td bgcolor=\"#FFF0F5\"><h3><pre> depth:</pre></h3></td>"));
        assert!(html.contains("must be zero or greater,must be a value less than 2<br/>"));
        assert!(html.contains("Can not be changed once set"));
    }

    #[test]
    fn test_grid_wraps_rows_and_alternates_cells() {
        let registry = small_registry();
        let renderer = DocRenderer::new(&registry).with_options(RenderOptions {
            font_face: "Mono".into(),
            grid_columns: 1,
        });
        let html = renderer.fx().html.remove(0).html;
        assert_eq!(html.matches("</tr><tr>").count(), 2);
        assert!(html.contains("<td bgcolor=\"#5e5e5e\">\n  <pre><h4><font color=\"white\">amp: </font></h4></pre>"));
        assert!(html.contains("<td bgcolor=\"#E8E8E8\">\n  <pre><h4><font color=\"#5e5e5e\">depth: </font></h4></pre>"));
        assert!(html.contains("face=\"Mono\""));
    }

    #[test]
    fn test_sample_docs() {
        let registry = Registry::builtin().unwrap();
        let docs = DocRenderer::new(&registry).samples();
        let markdown = &docs.markdown;
        assert!(markdown.starts_with("# Samples\n\n## Drum Sounds\n* :drum_heavy_kick\n"));
        assert!(markdown.contains("* :misc_burp\n\n\n## Percussive Sounds\n"));

        let html = docs.html_for("Sounds for Looping").unwrap();
        assert!(html.contains("<font color=\"DeepPink\">:loop_amen</font>"));
        assert!(html.contains("<h3><pre> finish:</pre></h3>"));
        assert_eq!(docs.html.len(), 8);
    }
}
