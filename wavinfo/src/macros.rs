// Shorthand for return Err(WavError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)             -> return Err(WavError::new(ErrorKind::Variant))
// - err!(Variant(Args, ...))  -> return Err(WavError::new(ErrorKind::Variant(Args, ...)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::WavError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($($arg:expr),+ $(,)?)) => {
		return Err(crate::error::WavError::new(
			crate::error::ErrorKind::$variant($($arg),+),
		))
	};
}

pub(crate) use err;
