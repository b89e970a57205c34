//! Typed literal values.
//!
//! A [`Value`] pairs a [`Type`] with a [`Literal`] payload. The payload set is
//! closed, so literal rendering is exhaustive and needs no runtime casts.

use javagen_core::{ClassName, Error, PrimitiveType, Result, Type};

use super::Annotation;
use crate::generation::ImportSet;

/// The payload of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Boolean(bool),
    Byte(i8),
    /// A single UTF-16 code unit, as Java's `char` is.
    Char(u16),
    Double(f64),
    Float(f32),
    Int(i32),
    Long(i64),
    Short(i16),
    /// A `java.lang.String` literal.
    String(String),
    /// An enum constant, rendered as `Type.CONSTANT`.
    EnumConstant {
        enum_type: ClassName,
        constant: String,
    },
    /// A class literal, rendered as `Type.class`.
    Class(ClassName),
    /// A nested annotation, as used in annotation arguments.
    Annotation(Box<Annotation>),
}

impl Literal {
    /// The type a payload has on its own.
    pub fn natural_type(&self) -> Type {
        match self {
            Self::Boolean(_) => Type::Primitive(PrimitiveType::Boolean),
            Self::Byte(_) => Type::Primitive(PrimitiveType::Byte),
            Self::Char(_) => Type::Primitive(PrimitiveType::Char),
            Self::Double(_) => Type::Primitive(PrimitiveType::Double),
            Self::Float(_) => Type::Primitive(PrimitiveType::Float),
            Self::Int(_) => Type::Primitive(PrimitiveType::Int),
            Self::Long(_) => Type::Primitive(PrimitiveType::Long),
            Self::Short(_) => Type::Primitive(PrimitiveType::Short),
            Self::String(_) => Type::string(),
            Self::EnumConstant { enum_type, .. } => Type::Declared(enum_type.clone()),
            Self::Class(_) => Type::Declared(ClassName::class()),
            Self::Annotation(annotation) => Type::Declared(annotation.class_name().clone()),
        }
    }
}

/// A literal together with its type.
///
/// # Example
///
/// ```
/// use javagen_codegen::generation::ImportSet;
/// use javagen_codegen::model::Value;
/// use javagen_core::Type;
///
/// let mut imports = ImportSet::new();
/// let value = Value::string("hello");
/// assert!(value.is_instance_of(&Type::string()));
/// assert_eq!(value.render(&mut imports), "\"hello\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    ty: Type,
    literal: Literal,
}

impl Value {
    /// Create a value typed by its payload.
    pub fn of(literal: Literal) -> Self {
        Self {
            ty: literal.natural_type(),
            literal,
        }
    }

    /// Create a value of type `ty`, failing if the payload is not an
    /// instance of it.
    pub fn typed(ty: Type, literal: Literal) -> Result<Self> {
        let actual = literal.natural_type();
        if !actual.is_assignable_to(&ty) {
            return Err(Error::type_mismatch(ty, actual));
        }
        Ok(Self { ty, literal })
    }

    /// Convenience: `boolean` value.
    pub fn boolean(v: bool) -> Self {
        Self::of(Literal::Boolean(v))
    }

    /// Convenience: `int` value.
    pub fn int(v: i32) -> Self {
        Self::of(Literal::Int(v))
    }

    /// Convenience: `long` value.
    pub fn long(v: i64) -> Self {
        Self::of(Literal::Long(v))
    }

    /// Convenience: `double` value.
    pub fn double(v: f64) -> Self {
        Self::of(Literal::Double(v))
    }

    /// Convenience: `char` value.
    ///
    /// Fails for characters outside the Basic Multilingual Plane, which need
    /// two UTF-16 units and so do not fit a Java `char`.
    pub fn char(v: char) -> Result<Self> {
        let mut units = [0u16; 2];
        match *v.encode_utf16(&mut units) {
            [unit] => Ok(Self::of(Literal::Char(unit))),
            _ => Err(Error::invalid_argument(format!(
                "'{}' (U+{:04X}) does not fit in a single Java char",
                v, v as u32
            ))),
        }
    }

    /// Convenience: string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::of(Literal::String(v.into()))
    }

    /// Convenience: enum constant value.
    pub fn enum_constant(enum_type: ClassName, constant: impl Into<String>) -> Self {
        Self::of(Literal::EnumConstant {
            enum_type,
            constant: constant.into(),
        })
    }

    /// Convenience: class literal value.
    pub fn class_literal(class_name: ClassName) -> Self {
        Self::of(Literal::Class(class_name))
    }

    /// Convenience: nested annotation value.
    pub fn annotation(annotation: Annotation) -> Self {
        Self::of(Literal::Annotation(Box::new(annotation)))
    }

    /// The type of this value.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The payload of this value.
    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    /// Whether this value may be stored where `target` is required.
    pub fn is_instance_of(&self, target: &Type) -> bool {
        self.ty.is_assignable_to(target)
    }

    /// Render the value as source text, registering referenced classes.
    pub fn render(&self, imports: &mut ImportSet) -> String {
        imports.add_type(&self.ty);

        match &self.literal {
            Literal::Boolean(v) => v.to_string(),
            Literal::Byte(v) => v.to_string(),
            Literal::Short(v) => v.to_string(),
            Literal::Int(v) => v.to_string(),
            Literal::Long(v) => format!("{}L", v),
            Literal::Float(v) => render_float(*v),
            Literal::Double(v) => render_double(*v),
            Literal::Char(unit) => match char::from_u32(u32::from(*unit)) {
                Some(c) => format!("'{}'", escape_char(c, '\'')),
                // lone surrogate
                None => format!("'\\u{:04x}'", unit),
            },
            Literal::String(s) => {
                let escaped: String = s.chars().map(|c| escape_char(c, '"')).collect();
                format!("\"{}\"", escaped)
            }
            Literal::EnumConstant {
                enum_type,
                constant,
            } => {
                format!("{}.{}", imports.reference_class(enum_type), constant)
            }
            Literal::Class(class_name) => {
                format!("{}.class", imports.reference_class(class_name))
            }
            Literal::Annotation(annotation) => annotation.render(imports),
        }
    }
}

fn render_double(v: f64) -> String {
    if v.is_nan() {
        "Double.NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 {
            "Double.POSITIVE_INFINITY".to_string()
        } else {
            "Double.NEGATIVE_INFINITY".to_string()
        }
    } else {
        // Debug keeps a fractional part: `1.0`, not `1`
        format!("{:?}", v)
    }
}

fn render_float(v: f32) -> String {
    if v.is_nan() {
        "Float.NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 {
            "Float.POSITIVE_INFINITY".to_string()
        } else {
            "Float.NEGATIVE_INFINITY".to_string()
        }
    } else {
        format!("{:?}f", v)
    }
}

/// Escape a character for use inside a literal delimited by `quote`.
fn escape_char(c: char, quote: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        c if c == quote => format!("\\{}", c),
        c if c.is_control() => format!("\\u{:04x}", c as u32),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &Value) -> String {
        value.render(&mut ImportSet::new())
    }

    fn scope() -> ClassName {
        ClassName::parse("di.Scope").unwrap()
    }

    #[test]
    fn test_primitive_literals() {
        assert_eq!(render(&Value::boolean(true)), "true");
        assert_eq!(render(&Value::int(-42)), "-42");
        assert_eq!(render(&Value::long(7)), "7L");
        assert_eq!(render(&Value::of(Literal::Byte(3))), "3");
        assert_eq!(render(&Value::of(Literal::Short(12))), "12");
    }

    #[test]
    fn test_floating_literals() {
        assert_eq!(render(&Value::double(1.0)), "1.0");
        assert_eq!(render(&Value::double(2.5)), "2.5");
        assert_eq!(render(&Value::of(Literal::Float(1.5))), "1.5f");
        assert_eq!(render(&Value::double(f64::NAN)), "Double.NaN");
        assert_eq!(
            render(&Value::double(f64::NEG_INFINITY)),
            "Double.NEGATIVE_INFINITY"
        );
        assert_eq!(
            render(&Value::of(Literal::Float(f32::INFINITY))),
            "Float.POSITIVE_INFINITY"
        );
    }

    #[test]
    fn test_char_literals() {
        let char_value = |c| Value::char(c).unwrap();
        assert_eq!(render(&char_value('a')), "'a'");
        assert_eq!(render(&char_value('\'')), "'\\''");
        assert_eq!(render(&char_value('"')), "'\"'");
        assert_eq!(render(&char_value('\n')), "'\\n'");
        assert_eq!(render(&char_value('\u{0}')), "'\\u0000'");
        assert_eq!(render(&char_value('é')), "'é'");
    }

    #[test]
    fn test_char_outside_basic_plane_is_rejected() {
        let err = Value::char('😀').unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_lone_surrogate_renders_as_escape() {
        assert_eq!(render(&Value::of(Literal::Char(0xD83D))), "'\\ud83d'");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(
            render(&Value::string("say \"hi\"\\\n")),
            "\"say \\\"hi\\\"\\\\\\n\""
        );
        assert_eq!(render(&Value::string("it's")), "\"it's\"");
    }

    #[test]
    fn test_string_registers_its_type() {
        let mut imports = ImportSet::new();
        Value::string("x").render(&mut imports);
        assert!(imports.contains(&ClassName::string()));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_primitive_registers_nothing() {
        let mut imports = ImportSet::new();
        Value::int(1).render(&mut imports);
        assert!(imports.is_empty());
    }

    #[test]
    fn test_enum_constant() {
        let mut imports = ImportSet::new();
        let value = Value::enum_constant(scope(), "SINGLETON");
        assert_eq!(value.render(&mut imports), "Scope.SINGLETON");
        assert!(imports.contains(&scope()));
        assert_eq!(value.ty(), &Type::declared(scope()));
    }

    #[test]
    fn test_class_literal() {
        let widget = ClassName::parse("x.y.Widget").unwrap();
        let mut imports = ImportSet::new();
        let value = Value::class_literal(widget.clone());

        assert_eq!(value.render(&mut imports), "Widget.class");
        assert!(imports.contains(&widget));
        assert!(value.is_instance_of(&Type::declared(ClassName::class())));
    }

    #[test]
    fn test_typed_accepts_matching_payload() {
        let value = Value::typed(Type::int(), Literal::Int(5)).unwrap();
        assert_eq!(value.ty(), &Type::int());
        assert_eq!(value.literal(), &Literal::Int(5));
    }

    #[test]
    fn test_typed_rejects_mismatch() {
        let err = Value::typed(Type::long(), Literal::Int(5)).unwrap_err();
        assert_eq!(err, Error::type_mismatch(Type::long(), Type::int()));

        let err = Value::typed(Type::VOID, Literal::Boolean(true)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_is_instance_of() {
        let value = Value::string("x");
        assert!(value.is_instance_of(&Type::string()));
        assert!(!value.is_instance_of(&Type::int()));
        assert!(!value.is_instance_of(&Type::VOID));
    }
}
