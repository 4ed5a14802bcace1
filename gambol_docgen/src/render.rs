//! Per-Class Page Rendering
//!
//! Each documented class becomes one markdown document: a setext title, the
//! class documentation, then a class-methods and an instance-methods section
//! with every method as a heading, its call signatures as a literal block, and
//! its prose. The markdown is converted to HTML and wrapped in the page
//! template. Pages land in a target directory that is wiped and recreated each
//! run, next to the stylesheet and any copied graphics.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use pulldown_cmark::{Options, Parser, html};

use crate::record::{ClassDoc, MethodDoc};

/// Fallback page template, compiled in.
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/template.html");
/// Stylesheet written next to the generated pages.
pub const STYLESHEET: &str = include_str!("../assets/style.css");

const CLASS_METHODS_HEADING: &str = "Class methods";
const INSTANCE_METHODS_HEADING: &str = "Instance methods";

/// Writes the documentation tree for one generation run.
pub struct HtmlGenerator<'a> {
    out_dir: &'a Path,
    template: String,
}

impl<'a> HtmlGenerator<'a> {
    /// Generator with the built-in page template.
    pub fn new(out_dir: &'a Path) -> Self {
        Self {
            out_dir,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Generator with a caller-supplied template file. The template is plain
    /// HTML with `{{title}}` and `{{body}}` placeholders.
    ///
    /// # Errors
    /// Fails when the template file cannot be read.
    pub fn with_template_file(out_dir: &'a Path, template: &Path) -> Result<Self> {
        let template = fs::read_to_string(template)
            .with_context(|| format!("reading template '{}'", template.display()))?;
        Ok(Self { out_dir, template })
    }

    /// Wipe and recreate the output directory, its `graphics/` subdirectory,
    /// and the stylesheet. Destructive: whatever was there before is gone.
    ///
    /// # Errors
    /// Fails on filesystem errors while deleting or creating the tree.
    pub fn prepare_target(&self) -> Result<()> {
        if self.out_dir.exists() {
            fs::remove_dir_all(self.out_dir)
                .with_context(|| format!("removing old '{}'", self.out_dir.display()))?;
        }
        fs::create_dir_all(self.out_dir.join("graphics"))
            .with_context(|| format!("creating '{}'", self.out_dir.display()))?;
        fs::write(self.out_dir.join("style.css"), STYLESHEET)
            .with_context(|| format!("writing stylesheet into '{}'", self.out_dir.display()))?;
        Ok(())
    }

    /// Copy every regular file in `assets` into the `graphics/` subdirectory.
    /// Returns how many files were copied.
    ///
    /// # Errors
    /// Fails when the assets directory cannot be read or a copy fails.
    pub fn copy_assets(&self, assets: &Path) -> Result<usize> {
        let graphics = self.out_dir.join("graphics");
        let mut copied = 0;
        for entry in fs::read_dir(assets).with_context(|| format!("reading assets '{}'", assets.display()))? {
            let path = entry.with_context(|| format!("reading assets '{}'", assets.display()))?.path();
            let Some(name) = path.file_name() else {
                continue;
            };
            if path.is_file() {
                fs::copy(&path, graphics.join(name))
                    .with_context(|| format!("copying asset '{}'", path.display()))?;
                copied += 1;
            }
        }
        debug!("copied {copied} asset file(s) into {}", graphics.display());
        Ok(copied)
    }

    /// Render one HTML page per class record, named after the lower-cased
    /// class name. Returns how many pages were written.
    ///
    /// The class/instance partition is computed once from the already-sorted
    /// method list and filtered per class by owning-class name, so section
    /// ordering always follows the global method order.
    ///
    /// # Errors
    /// Fails when a page cannot be written.
    pub fn generate(&self, classes: &[ClassDoc], methods: &[MethodDoc]) -> Result<usize> {
        let class_methods: Vec<&MethodDoc> = methods.iter().filter(|m| !m.is_instance).collect();
        let instance_methods: Vec<&MethodDoc> = methods.iter().filter(|m| m.is_instance).collect();

        for class in classes {
            let own_class: Vec<&MethodDoc> =
                class_methods.iter().filter(|m| m.class_name == class.name).copied().collect();
            let own_instance: Vec<&MethodDoc> =
                instance_methods.iter().filter(|m| m.class_name == class.name).copied().collect();

            let markdown = class_markdown(class, &own_class, &own_instance);
            let title = format!("Class: {}", class.name);
            let page = apply_template(&self.template, &title, &markdown_to_html(&markdown));

            let file = self.out_dir.join(format!("{}.html", class.name.to_lowercase()));
            debug!("writing {}", file.display());
            fs::write(&file, page).with_context(|| format!("writing page '{}'", file.display()))?;
        }
        info!("rendered {} class page(s) into {}", classes.len(), self.out_dir.display());
        Ok(classes.len())
    }
}

/// Assemble the markdown document for one class page.
pub fn class_markdown(class: &ClassDoc, class_methods: &[&MethodDoc], instance_methods: &[&MethodDoc]) -> String {
    let mut md = String::new();
    let title = format!("Class: {}", class.name);
    md.push_str(&title);
    md.push('\n');
    md.push_str(&"=".repeat(title.chars().count()));
    md.push_str("\n\n");
    md.push_str(&class.documentation);

    if !class_methods.is_empty() {
        push_section(&mut md, CLASS_METHODS_HEADING, class_methods);
    }
    if !instance_methods.is_empty() {
        push_section(&mut md, INSTANCE_METHODS_HEADING, instance_methods);
    }
    md
}

fn push_section(md: &mut String, heading: &str, methods: &[&MethodDoc]) {
    md.push_str("\n\n");
    md.push_str(heading);
    md.push('\n');
    md.push_str(&"-".repeat(heading.chars().count()));
    md.push_str("\n\n");
    for method in methods {
        push_method(md, method);
        md.push('\n');
    }
}

fn push_method(md: &mut String, method: &MethodDoc) {
    md.push_str("### ");
    md.push_str(&method.name);
    md.push_str(" ###\n\n");
    // each call signature on its own line of the literal block
    for seq in &method.call_seqs {
        md.push_str("    ");
        md.push_str(seq);
        md.push('\n');
    }
    md.push('\n');
    md.push_str(&method.documentation);
    md.push('\n');
}

/// Markdown to HTML through the markdown engine (tables enabled).
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Substitute `{{title}}` and `{{body}}` in a page template.
pub fn apply_template(template: &str, title: &str, body: &str) -> String {
    template.replace("{{title}}", title).replace("{{body}}", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, documentation: &str) -> ClassDoc {
        ClassDoc {
            name: name.to_string(),
            documentation: documentation.to_string(),
        }
    }

    fn method(name: &str, class_name: &str, is_instance: bool, seqs: &[&str]) -> MethodDoc {
        MethodDoc {
            name: name.to_string(),
            class_name: class_name.to_string(),
            is_instance,
            call_seqs: seqs.iter().map(ToString::to_string).collect(),
            documentation: format!("Docs for {name}.\n"),
        }
    }

    #[test]
    fn title_is_setext_underlined_to_length() {
        let md = class_markdown(&class("Foo", "Foo does things.\n"), &[], &[]);
        assert!(md.starts_with("Class: Foo\n==========\n\nFoo does things.\n"));
    }

    #[test]
    fn sections_appear_only_when_populated() {
        let md = class_markdown(&class("Foo", ""), &[], &[]);
        assert!(!md.contains(CLASS_METHODS_HEADING));
        assert!(!md.contains(INSTANCE_METHODS_HEADING));

        let new = method("new", "Foo", false, &["new() \u{2192} a_foo"]);
        let md = class_markdown(&class("Foo", ""), &[&new], &[]);
        assert!(md.contains("Class methods\n-------------\n"));
        assert!(!md.contains(INSTANCE_METHODS_HEADING));
    }

    #[test]
    fn each_call_signature_gets_its_own_literal_line() {
        let every = method("every", "Timer", true, &["every(ms)", "every(ms, count)"]);
        let md = class_markdown(&class("Timer", ""), &[], &[&every]);
        assert!(md.contains("### every ###\n\n    every(ms)\n    every(ms, count)\n"));
    }

    #[test]
    fn markdown_converts_to_html() {
        let md = class_markdown(
            &class("Foo", "Foo does *things*.\n"),
            &[],
            &[&method("bar", "Foo", true, &["bar(x) \u{2192} y"])],
        );
        let html = markdown_to_html(&md);
        assert!(html.contains("<h1>Class: Foo</h1>"));
        assert!(html.contains("<em>things</em>"));
        assert!(html.contains("<h3>bar</h3>"));
        assert!(html.contains("<pre><code>bar(x) \u{2192} y\n</code></pre>"));
    }

    #[test]
    fn template_placeholders_are_substituted() {
        let page = apply_template("<title>{{title}}</title><main>{{body}}</main>", "Class: Foo", "<p>hi</p>");
        assert_eq!(page, "<title>Class: Foo</title><main><p>hi</p></main>");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(apply_template("static page", "t", "b"), "static page");
    }

    #[test]
    fn default_template_carries_both_placeholders() {
        assert!(DEFAULT_TEMPLATE.contains("{{title}}"));
        assert!(DEFAULT_TEMPLATE.contains("{{body}}"));
        assert!(DEFAULT_TEMPLATE.contains("style.css"));
    }
}
