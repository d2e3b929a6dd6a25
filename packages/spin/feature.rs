/// An optional capability of the companion module, detected by the presence of a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
	/// The logical name. The header probed for is `<name>.h`.
	pub name: &'static str,

	/// The preprocessor definition emitted when the header is present.
	pub token: &'static str,
}

impl Feature {
	#[must_use]
	pub fn header(&self) -> String {
		format!("{}.h", self.name)
	}
}

/// The features probed for by default, in emission order.
pub const FEATURES: &[Feature] = &[
	Feature {
		name: "additional_schemes",
		token: "ELECTRON_SPIN_ADDITIONAL_SCHEMES",
	},
	Feature {
		name: "interceptors",
		token: "ELECTRON_SPIN_INTERCEPTORS",
	},
	Feature {
		name: "preferences",
		token: "ELECTRON_SPIN_PREFERENCES",
	},
	Feature {
		name: "pre_main_message_loop_run",
		token: "ELECTRON_SPIN_PRE_MAIN_MESSAGE_LOOP_RUN",
	},
	Feature {
		name: "scheme_url_loader",
		token: "ELECTRON_SPIN_SCHEME_URL_LOADER",
	},
];

/// The single feature understood by companion modules that predate [`FEATURES`].
pub const BUILTIN_SCHEMES_FEATURES: &[Feature] = &[Feature {
	name: "builtin_schemes",
	token: "ADDITIONAL_BUILTIN_SCHEMES",
}];

#[cfg(test)]
mod tests {
	use super::{BUILTIN_SCHEMES_FEATURES, FEATURES};

	#[test]
	fn tokens_are_derived_from_names() {
		for feature in FEATURES {
			let expected = format!("ELECTRON_SPIN_{}", feature.name.to_ascii_uppercase());
			assert_eq!(feature.token, expected, "unexpected token for {}", feature.name);
		}
	}

	#[test]
	fn names_are_unique() {
		for (i, feature) in FEATURES.iter().enumerate() {
			assert!(
				FEATURES[i + 1..].iter().all(|other| other.name != feature.name),
				"duplicate feature {}",
				feature.name
			);
		}
	}

	#[test]
	fn headers() {
		assert_eq!(FEATURES[3].header(), "pre_main_message_loop_run.h");
		assert_eq!(BUILTIN_SCHEMES_FEATURES[0].header(), "builtin_schemes.h");
		assert_eq!(BUILTIN_SCHEMES_FEATURES[0].token, "ADDITIONAL_BUILTIN_SCHEMES");
	}
}
