pub const MENU: &str = "\
pageprobe commands
  0  menu           show this menu
  1  links          extract all links
  2  images         extract all images
  3  metadata       extract page metadata
  4  structure      count structural elements
  5  content        extract headings, paragraphs and list items
  6  data           show the current session data
  7  seo            run the SEO checklist (max 80)
  8  accessibility  run the accessibility checklist (max 100)
  9  resources      list scripts, stylesheets and fonts
 10  performance    read page timing metrics
 11  all            extract everything at once
 12  export         write session data to a JSON file
     help | about | quit";

pub const HELP: &str = "\
Usage: enter a command id or name per line, e.g. `7` or `seo`.

Every extraction stores its result in the session. `data` prints the
session, `all` replaces it with a complete report, and `export` writes it
to pageprobe-export-<millis>.json in the export directory. An export with
an empty session writes nothing.

Performance metrics need a timing source: a recorded snapshot passed with
--timing, or the response timing of a page fetched over HTTP.";

pub fn about() -> String {
    format!(
        "{} {}\nExtracts links, images, metadata, structure, content and resources from a\nweb page and scores its SEO and accessibility basics.",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
