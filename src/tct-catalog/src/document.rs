//! Full "How It Works" page around the features table.
//!
//! Everything here is static presentation. The only dynamic part is the
//! table, which is rendered from page state by the caller.

use std::fmt::Write;

use crate::page::{PAGE_TITLE, PageChrome};
use crate::render::{FeatureTable, escape_html};

const OVERVIEW: &str = r#"  <h1 class="how-it-works">How It Works</h1>
  <p>
    Our toolkit is implemented completely in Python, with our code open-sourced via GitHub,
    and our documentation managed by ReadTheDocs (using Sphinx).
  </p>
  <p>
    The typical user should not need to directly interact with the original source code,
    and should be able to directly download our package via pip. However, we welcome open-sourced
    contributions to the toolkit, particularly bug reports and suggestions for additional features to include.
  </p>
"#;

const GETTING_STARTED: &str = r#"  <h1 class="how-it-works-headers">Getting Started</h1>
  <p>
    Our tool is publicly available on <a href="https://pypi.org/project/team-comm-tools/">PyPI</a>,
    with a getting started guide available in our
    <a href="https://conversational-featurizer.readthedocs.io/en/latest/examples.html">documentation</a>.
  </p>
  <p>
    To use our tool, please ensure that you have Python &gt;= 3.10 installed and a working version of
    <a href="https://pypi.org/project/pip/">pip</a>. Then, in your local environment, run the following:
  </p>
  <div class="code">pip install team_comm_tools</div>
  <p>This command will automatically install our package and all required dependencies.</p>
"#;

const TROUBLESHOOTING: &str = r#"  <h1 class="home-subheaders">Troubleshooting</h1>
  <p>
    If some dependency installations fail (for example, <span class="mini-code">en_core_web_sm</span>
    from Spacy is not found, or an NLTK resource is missing), run this command to force the
    installation of the Spacy and NLTK dependencies:
  </p>
  <div class="code">download_resources</div>
  <p>
    If the 'wordnet' package from NLTK is still not found, it may need to be unzipped manually, as
    documented in this <a href="https://github.com/nltk/nltk/issues/3028">thread</a>.
  </p>
"#;

const DOCUMENTATION: &str = r#"  <h1 class="how-it-works-headers">Technical Documentation: ReadTheDocs</h1>
  <p>
    We use ReadTheDocs to host the latest documentation for the toolkit:
    <a href="https://conversational-featurizer.readthedocs.io/">https://conversational-featurizer.readthedocs.io/</a>
  </p>
  <div class="bullet-points">
    <ul>
      <li>How to import and use the toolkit;</li>
      <li>Technical details for how conversational attributes are implemented;</li>
      <li>Conceptual details for how to understand and interpret the conversational attributes we measure.</li>
    </ul>
  </div>
"#;

const GITHUB: &str = r#"  <div class="github">
    <h1 class="how-it-works-headers">Open-Sourced Code: GitHub</h1>
    <p>
      The implementation details of each feature are public on GitHub:
      <a href="https://github.com/Watts-Lab/team-process-map">Github</a>.
    </p>
    <p>
      We encourage anyone interested in developing a feature to either contact
      <a href="http://xinlanemilyhu.com">Xinlan Emily Hu</a> or to make a pull request.
    </p>
  </div>
"#;

/// Render the complete HTML document.
///
/// The title comes from the chrome once the page has activated, and falls
/// back to [`PAGE_TITLE`] before that.
pub fn render_document(chrome: &PageChrome, table: &FeatureTable) -> String {
    let title = chrome.title().unwrap_or(PAGE_TITLE);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "  <title>{}</title>", escape_html(title));
    out.push_str("</head>\n<body>\n<div class=\"how-it-works-container\">\n");
    for section in [OVERVIEW, GETTING_STARTED, TROUBLESHOOTING, DOCUMENTATION, GITHUB] {
        out.push_str(section);
    }
    out.push_str("  <h1 class=\"how-it-works-headers\">Features</h1>\n");
    out.push_str("  <div class=\"features\">\n");
    out.push_str(&table.to_html());
    out.push_str("  </div>\n</div>\n</body>\n</html>\n");
    out
}
