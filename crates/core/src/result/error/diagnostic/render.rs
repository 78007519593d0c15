// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Plangist

use std::fmt::{self, Display, Formatter};

use crate::result::error::diagnostic::Diagnostic;

/// Renders a [`Diagnostic`] for human consumption.
///
/// Renderers are stateless. `render` writes into a formatter so the
/// output can be embedded into larger reports; `render_string` is the
/// convenience most callers want.
pub trait DiagnosticRenderer {
	fn render(diagnostic: &Diagnostic, f: &mut Formatter<'_>) -> fmt::Result;

	fn render_string(diagnostic: &Diagnostic) -> String
	where
		Self: Sized,
	{
		struct Adapter<'a> {
			diagnostic: &'a Diagnostic,
			render: fn(&Diagnostic, &mut Formatter<'_>) -> fmt::Result,
		}

		impl Display for Adapter<'_> {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				(self.render)(self.diagnostic, f)
			}
		}

		Adapter {
			diagnostic,
			render: Self::render,
		}
		.to_string()
	}
}

/// The renderer used by [`Error`](crate::Error)'s `Display` impl.
pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(diagnostic: &Diagnostic, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", diagnostic.code, diagnostic.message)?;
		if !diagnostic.fragment.is_none() {
			write!(f, "\n  input: {}", diagnostic.fragment.text())?;
		}
		if let Some(offset) = diagnostic.offset {
			write!(f, "\n  offset: byte {}", offset)?;
		}
		if let Some(help) = &diagnostic.help {
			write!(f, "\n  help: {}", help)?;
		}
		let mut cause = diagnostic.cause.as_deref();
		while let Some(inner) = cause {
			write!(f, "\n  caused by: [{}] {}", inner.code, inner.message)?;
			cause = inner.cause.as_deref();
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fragment::OwnedFragment;

	#[test]
	fn test_render_message_only() {
		let diagnostic = Diagnostic {
			code: "GIST_005".to_string(),
			message: "operator requires a child".to_string(),
			..Default::default()
		};
		assert_eq!(DefaultRenderer::render_string(&diagnostic), "[GIST_005] operator requires a child");
	}

	#[test]
	fn test_render_full() {
		let diagnostic = Diagnostic {
			code: "GIST_002".to_string(),
			message: "unsupported plan gist version 3".to_string(),
			fragment: OwnedFragment::testing("BgE="),
			offset: Some(0),
			help: Some("only plan gist version 1 is supported".to_string()),
			cause: None,
		};
		assert_eq!(
			DefaultRenderer::render_string(&diagnostic),
			"[GIST_002] unsupported plan gist version 3\n  input: BgE=\n  offset: byte 0\n  help: only plan gist version 1 is supported"
		);
	}

	#[test]
	fn test_render_cause_chain() {
		let diagnostic = Diagnostic {
			code: "GIST_001".to_string(),
			message: "gist is not valid base64".to_string(),
			cause: Some(Box::new(Diagnostic {
				code: "B64_001".to_string(),
				message: "invalid byte 33 at offset 2".to_string(),
				..Default::default()
			})),
			..Default::default()
		};
		assert_eq!(
			DefaultRenderer::render_string(&diagnostic),
			"[GIST_001] gist is not valid base64\n  caused by: [B64_001] invalid byte 33 at offset 2"
		);
	}
}
