
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        fmt,
        iter,
        num,
        ops,
        str,
        string,
        vec,
    };
}
