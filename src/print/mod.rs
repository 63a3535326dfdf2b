pub mod ansi;

use ansi::StripAnsi;

use std::io;

/// A trait for values that can be pretty-printed.
pub trait PrettyPrint<Ctx, Info: Clone = usize> {
    fn pretty_print<Output: io::Write>(
        &self,
        out: &mut Output,
        ctx: &Ctx,
        info: Info,
    ) -> io::Result<()>;
}

/// A trait for values that can be pretty-printed to a string.
pub trait PrettyString<Ctx, Info: Clone>: PrettyPrint<Ctx, Info> {
    fn pretty_string(&self, ctx: &Ctx) -> String;
    fn plain_string(&self, ctx: &Ctx) -> String;
}

impl<T: PrettyPrint<Ctx, Info>, Ctx, Info: Default + Clone> PrettyString<Ctx, Info> for T {
    fn pretty_string(&self, ctx: &Ctx) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.pretty_print(&mut buf, ctx, Info::default());
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn plain_string(&self, ctx: &Ctx) -> String {
        let mut out = StripAnsi::new(Vec::new());
        let _ = self.pretty_print(&mut out, ctx, Info::default());
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }
}

//
// MARK: PrettyPrint default impls
//

impl<T: PrettyPrint<Ctx, Info>, Ctx, Info: Clone> PrettyPrint<Ctx, Info> for Box<T> {
    fn pretty_print<Output: io::Write>(
        &self,
        out: &mut Output,
        ctx: &Ctx,
        info: Info,
    ) -> io::Result<()> {
        (**self).pretty_print(out, ctx, info)
    }
}

impl<T: PrettyPrint<Ctx, Info>, Ctx, Info: Clone> PrettyPrint<Ctx, Info> for &T {
    fn pretty_print<Output: io::Write>(
        &self,
        out: &mut Output,
        ctx: &Ctx,
        info: Info,
    ) -> io::Result<()> {
        (**self).pretty_print(out, ctx, info)
    }
}
