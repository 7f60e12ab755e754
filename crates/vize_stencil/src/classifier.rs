//! Expression classifier.
//!
//! Given a node that produces a class string, finds every template-literal
//! interpolation that makes the value dynamic. The walk is purely syntactic:
//! only interpolations that are provably present are reported, and any node
//! kind the classifier does not understand ends its branch silently.
//!
//! ```text
//! cond ? [`bg-${bg}`] : { [`h-${w}`]: flag }
//!        ^^^^^^^^^^^^   ^^^^^^^^^^^^^^^^^^^^
//!        consequent     alternate (keys only)
//!        -> bg          -> w
//! ```

use oxc_ast::ast::{
    Argument, ArrayExpressionElement, Expression, JSXAttributeValue, ObjectPropertyKind,
    PropertyKey, TemplateLiteral,
};
use oxc_span::{GetSpan, Span};

/// A node that may construct a class string.
///
/// Besides plain expressions this covers the host wrappers a candidate can be
/// handed over in: JSX attribute values, call arguments, array elements,
/// property keys and the quasi of a tagged template.
#[derive(Debug, Clone, Copy)]
pub enum ClassSource<'b, 'a> {
    Expression(&'b Expression<'a>),
    /// The quasi of a tagged template (`` tw`...` ``).
    Template(&'b TemplateLiteral<'a>),
    /// A JSX attribute value. Only expression containers are inspected.
    JsxValue(&'b JSXAttributeValue<'a>),
    Argument(&'b Argument<'a>),
    ArrayElement(&'b ArrayExpressionElement<'a>),
    PropertyKey(&'b PropertyKey<'a>),
}

impl<'b, 'a> ClassSource<'b, 'a> {
    /// Unwrap host wrappers down to the expression they hold.
    ///
    /// Spreads, elisions, empty containers and static keys hold nothing
    /// classifiable. Template quasis are not expressions and return `None`.
    fn as_expression(self) -> Option<&'b Expression<'a>> {
        match self {
            Self::Expression(expr) => Some(expr),
            Self::Template(_) => None,
            Self::JsxValue(JSXAttributeValue::ExpressionContainer(container)) => {
                container.expression.as_expression()
            }
            Self::JsxValue(_) => None,
            Self::Argument(arg) => arg.as_expression(),
            Self::ArrayElement(element) => element.as_expression(),
            Self::PropertyKey(key) => key.as_expression(),
        }
    }
}

impl<'b, 'a> From<&'b Expression<'a>> for ClassSource<'b, 'a> {
    fn from(expr: &'b Expression<'a>) -> Self {
        Self::Expression(expr)
    }
}

impl<'b, 'a> From<&'b TemplateLiteral<'a>> for ClassSource<'b, 'a> {
    fn from(template: &'b TemplateLiteral<'a>) -> Self {
        Self::Template(template)
    }
}

/// An interpolated expression found inside a class-producing template literal.
#[derive(Debug, Clone, Copy)]
pub struct Offense<'b, 'a> {
    node: &'b Expression<'a>,
}

impl<'b, 'a> Offense<'b, 'a> {
    /// The interpolated expression itself.
    #[inline]
    pub fn node(&self) -> &'b Expression<'a> {
        self.node
    }

    /// Span of the interpolated expression, relative to the parsed text.
    #[inline]
    pub fn span(&self) -> Span {
        self.node.span()
    }
}

/// Collect every dynamic interpolation reachable from `source`.
///
/// Offenses come out in encounter order: left to right inside each template
/// literal, then in traversal order across sub-expressions. The same physical
/// expression reached twice is reported twice.
pub fn classify<'b, 'a>(source: impl Into<ClassSource<'b, 'a>>) -> Vec<Offense<'b, 'a>> {
    let mut offenses = Vec::new();
    // Children are pushed in reverse so pops follow document order.
    let mut stack = vec![source.into()];

    while let Some(source) = stack.pop() {
        if let ClassSource::Template(template) = source {
            push_interpolations(template, &mut offenses);
            continue;
        }

        let Some(expr) = source.as_expression() else {
            continue;
        };

        match expr {
            Expression::TemplateLiteral(template) => {
                push_interpolations(template, &mut offenses);
            }
            Expression::ParenthesizedExpression(paren) => {
                stack.push(ClassSource::Expression(&paren.expression));
            }
            // The test is a guard, never a class source.
            Expression::ConditionalExpression(cond) => {
                stack.push(ClassSource::Expression(&cond.alternate));
                stack.push(ClassSource::Expression(&cond.consequent));
            }
            // `flag && "classes"`: the left operand is a guard.
            Expression::LogicalExpression(logical) => {
                stack.push(ClassSource::Expression(&logical.right));
            }
            Expression::ArrayExpression(array) => {
                stack.extend(array.elements.iter().rev().map(ClassSource::ArrayElement));
            }
            // `{ [`h-${w}`]: flag }`: keys are the classes, values are toggles.
            Expression::ObjectExpression(object) => {
                stack.extend(
                    object.properties.iter().rev().filter_map(|prop| match prop {
                        ObjectPropertyKind::ObjectProperty(p) => {
                            Some(ClassSource::PropertyKey(&p.key))
                        }
                        ObjectPropertyKind::SpreadProperty(_) => None,
                    }),
                );
            }
            Expression::StringLiteral(_) => {}
            _ => {}
        }
    }

    offenses
}

#[inline]
fn push_interpolations<'b, 'a>(
    template: &'b TemplateLiteral<'a>,
    offenses: &mut Vec<Offense<'b, 'a>>,
) {
    offenses.extend(template.expressions.iter().map(|node| Offense { node }));
}
