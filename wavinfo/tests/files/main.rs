#![allow(missing_docs)]

mod wav;
