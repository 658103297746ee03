//! HTML fixtures shared by the unit tests.

pub const PAGE_URL: &str = "https://example.com/articles/rust";

/// Mock pages for extractor and auditor tests
pub mod mocks {
    /// Creates a standard HTML page for testing
    pub fn basic_html_page(title: &str, h1: &str) -> String {
        format!(
            r#"
            <html>
                <head><title>{}</title></head>
                <body>
                    <h1>{}</h1>
                    <p>Some content here.</p>
                </body>
            </html>
            "#,
            title, h1
        )
    }

    /// Creates HTML with an image missing alt text
    pub fn html_with_missing_alt() -> String {
        r#"
        <html>
            <head><title>Test Page</title></head>
            <body>
                <h1>Welcome</h1>
                <img src="logo.png">
            </body>
        </html>
        "#
        .to_string()
    }

    /// A page that passes every SEO check: 80 points, no issues.
    pub fn seo_complete_page() -> String {
        format!(
            r#"
            <html lang="en">
                <head>
                    <title>Rust ownership explained simply</title>
                    <meta name="description" content="{}">
                    <meta name="robots" content="index,follow">
                    <meta name="viewport" content="width=device-width, initial-scale=1">
                    <link rel="canonical" href="https://example.com/articles/rust">
                </head>
                <body style="background-color: #fff">
                    <h1>Ownership</h1>
                    <h2>Borrowing</h2>
                    <img src="/diagram.png" alt="Ownership diagram">
                    <p>Ownership is a set of rules that govern memory management.</p>
                </body>
            </html>
            "#,
            "d".repeat(120)
        )
    }

    /// Body with `count` paragraphs that are all long enough to be kept.
    pub fn html_with_paragraphs(count: usize) -> String {
        let paragraphs: String = (0..count)
            .map(|i| format!("<p>Paragraph number {i} with enough text to qualify.</p>"))
            .collect();
        format!("<html><body>{paragraphs}</body></html>")
    }

    /// Body with headings at the given levels, in order.
    pub fn html_with_headings(levels: &[u8]) -> String {
        let headings: String = levels
            .iter()
            .map(|level| format!("<h{level}>Heading {level}</h{level}>"))
            .collect();
        format!("<html><body>{headings}</body></html>")
    }

    /// A form mixing labelled and unlabelled inputs.
    pub fn form_page() -> String {
        r#"
        <html lang="en">
            <body>
                <form>
                    <label for="email">Email</label>
                    <input id="email" type="email">
                    <label>Name <input type="text" name="name"></label>
                    <input type="text" name="unlabelled">
                    <input type="hidden" name="token" value="x">
                </form>
            </body>
        </html>
        "#
        .to_string()
    }
}
