// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete unit implementations shipped with the crate.
//!
//! # Local Backend
//! In-process numeric units over `f32` buffers:
//! - **Noop**: zero inputs, zero outputs; useful as a placeholder
//! - **Affine**: element-wise `gain * x + bias`
//! - **Sum**: reduction to a single value, optionally averaged
//! - **Clamp**: element-wise bounding to `[min, max]`
//!
//! Every unit here declares its name with `register_unit!` and is listed in
//! [`local::BUILTIN_UNITS`]. Units defined outside the crate follow the same
//! two steps and are passed to [`crate::registry::initialize`] or registered
//! directly on a [`crate::registry::UnitRegistry`].
//!
//! # Examples
//!
//! ```rust
//! use unit_registry::registry::UnitRegistry;
//! use unit_registry::traits::ParamValue;
//!
//! let registry = UnitRegistry::with_builtins()?;
//! let mut clamp = registry.create("Clamp")?;
//! clamp.set_parameter("max", ParamValue::Float(1.0))?;
//!
//! let mut output = [0.0];
//! clamp.execute(&[4.0], &mut output)?;
//! assert_eq!(output, [1.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod local;
