// 出力システムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::PrintResult;
use mockall::automock;
use std::io::{self, Write};

/// 自身を1行以上のテキストとして書き出せる値
///
/// タプルは可変長引数の代わりで、各要素を順番に1行ずつ書き出す
pub trait Printable {
    /// 出力先に行単位で書き出す
    fn write_lines<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
}

macro_rules! impl_printable_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Printable for $ty {
                fn write_lines<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                    writeln!(out, "{self}")
                }
            }
        )*
    };
}

impl_printable_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Printable + ?Sized> Printable for &T {
    fn write_lines<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        (**self).write_lines(out)
    }
}

macro_rules! impl_printable_tuple {
    ($($name:ident $var:ident),+) => {
        impl<$($name: Printable),+> Printable for ($($name,)+) {
            fn write_lines<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                let ($($var,)+) = self;
                $($var.write_lines(out)?;)+
                Ok(())
            }
        }
    };
}

impl_printable_tuple!(A a);
impl_printable_tuple!(A a, B b);
impl_printable_tuple!(A a, B b, C c);
impl_printable_tuple!(A a, B b, C c, D d);

/// 出力能力を表すトレイト
///
/// 戻り値は `PrintResult<()>` に固定されているため、
/// 意味のある値を返す print はこの能力を満たさない
pub trait Print<A> {
    /// 引数を出力する
    fn print(&mut self, args: A) -> PrintResult<()>;
}

// Print for Box<dyn Print<A>>
impl<A, P: Print<A> + ?Sized> Print<A> for Box<P> {
    fn print(&mut self, args: A) -> PrintResult<()> {
        self.as_mut().print(args)
    }
}

impl<A, P: Print<A> + ?Sized> Print<A> for &mut P {
    fn print(&mut self, args: A) -> PrintResult<()> {
        (**self).print(args)
    }
}

/// 保持している値をテキストに変換できるストレージ
#[automock]
pub trait Storable {
    /// 保持値のテキスト表現を取得
    fn to_text(&self) -> String;
}

/// テキストを出力するプリンターポリシー
#[automock]
pub trait TextPrinter {
    /// テキストを1行出力する
    fn print_text(&mut self, text: &str) -> PrintResult<()>;
}

/// SubtypeDispatcherが受け付ける基底型
///
/// 出力できるだけでは不十分で、このトレイトを明示的に実装した型のみが
/// ディスパッチ対象になる
pub trait DynamicBase {
    /// 診断用の型名
    fn type_name(&self) -> &'static str;
}

impl<D: DynamicBase + ?Sized> DynamicBase for Box<D> {
    fn type_name(&self) -> &'static str {
        self.as_ref().type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Printable>(value: T) -> String {
        let mut out = Vec::new();
        value.write_lines(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_integers_render_as_decimal() {
        assert_eq!(render(0), "0\n");
        assert_eq!(render(-42i64), "-42\n");
        assert_eq!(render(i32::MIN), "-2147483648\n");
        assert_eq!(render(u64::MAX), "18446744073709551615\n");
    }

    #[test]
    fn test_text_renders_unchanged() {
        assert_eq!(render("test"), "test\n");
        assert_eq!(render(String::from("  spaced  ")), "  spaced  \n");
        assert_eq!(render(""), "\n");
    }

    #[test]
    fn test_tuple_renders_each_element_in_order() {
        assert_eq!(render((1, "two", 3.5)), "1\ntwo\n3.5\n");
        assert_eq!(render(('a', true, 7u8, "end")), "a\ntrue\n7\nend\n");
    }

    #[test]
    fn test_mock_storable() {
        let mut storage = MockStorable::new();
        storage.expect_to_text().return_const("42".to_string());

        assert_eq!(storage.to_text(), "42");
    }

    #[test]
    fn test_mock_text_printer() {
        let mut printer = MockTextPrinter::new();
        printer
            .expect_print_text()
            .withf(|text| text.to_string() == "hello")
            .times(1)
            .returning(|_| Ok(()));

        assert!(printer.print_text("hello").is_ok());
    }

    struct Named;

    impl DynamicBase for Named {
        fn type_name(&self) -> &'static str {
            "Named"
        }
    }

    #[test]
    fn test_dynamic_base_through_box() {
        let boxed: Box<dyn DynamicBase> = Box::new(Named);
        assert_eq!(boxed.type_name(), "Named");
    }
}
