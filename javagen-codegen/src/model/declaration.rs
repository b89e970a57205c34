use super::Annotation;
use crate::{builder::CodeBuilder, generation::ImportSet};

/// Where a declaration places its annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLayout {
    /// One annotation per line above the declaration.
    Stacked,
    /// Annotations on the same line, before the declaration (parameters).
    Inline,
}

/// A renderable declaration: class, field, method or parameter.
///
/// Implementors supply their annotations and a body hook; [`render`]
/// always emits the annotations first, in attachment order, so no
/// declaration kind can skip them.
///
/// [`render`]: Declaration::render
pub trait Declaration {
    /// The declared name.
    fn name(&self) -> &str;

    /// Annotations in attachment order.
    fn annotations(&self) -> &[Annotation];

    /// How annotations are laid out.
    fn annotation_layout(&self) -> AnnotationLayout {
        AnnotationLayout::Stacked
    }

    /// Render the declaration itself, after its annotations.
    fn render_body(&self, code: &mut CodeBuilder, imports: &mut ImportSet);

    /// Render annotations and body into `code`, registering every
    /// referenced class in `imports`.
    fn render(&self, code: &mut CodeBuilder, imports: &mut ImportSet) {
        let layout = self.annotation_layout();
        for annotation in self.annotations() {
            let text = annotation.render(imports);
            match layout {
                AnnotationLayout::Stacked => {
                    code.push_line(&text);
                }
                AnnotationLayout::Inline => {
                    code.push_raw(&text).push_raw(" ");
                }
            }
        }
        self.render_body(code, imports);
    }

    /// Render into a fresh default builder.
    fn render_to_string(&self, imports: &mut ImportSet) -> String {
        let mut code = CodeBuilder::default();
        self.render(&mut code, imports);
        code.build()
    }
}
