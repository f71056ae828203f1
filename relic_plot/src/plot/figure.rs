/// Scales its content to the text width.
pub fn resize_box(children: &str) -> String {
    format!("\\resizebox{{\\textwidth}}{{!}}{{\n{}\n}}", children)
}

/// Half-width captioned container, meant to sit next to another one.
pub struct SubFigure<'a> {
    caption: &'a str,
    label: &'a str,
}

impl<'a> SubFigure<'a> {
    pub fn new(caption: &'a str, label: &'a str) -> Self {
        Self { caption, label }
    }

    pub fn render(&self, children: &str) -> String {
        format!(
            "\\begin{{subfigure}}[b]{{0.48\\textwidth}}
    \\centering

{}

    \\caption{{{}}}
    \\label{{{}}}
\\end{{subfigure}}",
            children, self.caption, self.label
        )
    }
}

pub struct Figure<'a> {
    caption: &'a str,
    label: &'a str,
}

impl<'a> Figure<'a> {
    pub fn new(caption: &'a str, label: &'a str) -> Self {
        Self { caption, label }
    }

    /// Lays out sub-figures two per line.
    pub fn render(&self, subfigures: &[String]) -> String {
        let lines: Vec<_> = subfigures
            .chunks(2)
            .map(|line| line.join("\n\\hfill\n"))
            .collect();
        format!(
            "\\begin{{figure}}[H]
    \\centering

{}

    \\caption{{{}}}
    \\label{{{}}}
\\end{{figure}}",
            lines.join("\n\\\\\n"),
            self.caption,
            self.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize() {
        assert_eq!(resize_box("x"), "\\resizebox{\\textwidth}{!}{\nx\n}");
    }

    #[test]
    fn subfigure() {
        let rendered =
            SubFigure::new("Some caption.", "fig:some").render("body");
        assert_eq!(
            rendered,
            concat!(
                "\\begin{subfigure}[b]{0.48\\textwidth}\n",
                "    \\centering\n\n",
                "body\n\n",
                "    \\caption{Some caption.}\n",
                "    \\label{fig:some}\n",
                "\\end{subfigure}",
            )
        );
    }

    #[test]
    fn two_per_line() {
        let subfigures: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        let rendered = Figure::new("All.", "fig:all").render(&subfigures);
        assert!(
            rendered.starts_with("\\begin{figure}[H]\n    \\centering\n\n")
        );
        assert!(rendered
            .contains("\na\n\\hfill\nb\n\\\\\nc\n\\hfill\nd\n\\\\\ne\n"));
        assert!(rendered.ends_with(
            "\n    \\caption{All.}\n    \\label{fig:all}\n\\end{figure}"
        ));
    }
}
