// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Browser-automation seam.
//!
//! The verification layer only reads from the page: visibility, geometry,
//! text and attributes. Navigation and input injection stay with whatever
//! implements [`Driver`].

use crate::error::DriverError;
use crate::geometry::BoundingBox;
use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`Driver`] methods.
pub type DriverFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DriverError>> + Send + 'a>>;

/// How an element is found on the page
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Accessible role and name, e.g. `button` / `Calculate`
    Role { role: String, name: String },
    /// `data-testid` attribute
    TestId(String),
}

impl Locator {
    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Role { role, name } => write!(f, "{role} \"{name}\""),
            Locator::TestId(id) => write!(f, "[data-testid={id}]"),
        }
    }
}

/// Read-only access to rendered page state.
///
/// Missing elements are not errors for `is_visible` (false) and
/// `bounding_box` (`None`); `text_content` and `attribute` report them as
/// [`DriverError::NotFound`].
pub trait Driver: Send + Sync {
    fn is_visible<'a>(&'a self, locator: &'a Locator) -> DriverFuture<'a, bool>;

    /// Geometry, or `None` when the element is absent or not rendered
    fn bounding_box<'a>(&'a self, locator: &'a Locator) -> DriverFuture<'a, Option<BoundingBox>>;

    fn text_content<'a>(&'a self, locator: &'a Locator) -> DriverFuture<'a, Option<String>>;

    fn attribute<'a>(
        &'a self,
        locator: &'a Locator,
        name: &'a str,
    ) -> DriverFuture<'a, Option<String>>;
}

/// State of one element in a [`MemoryDriver`]
#[derive(Clone, Debug, Default)]
pub struct ElementState {
    pub visible: bool,
    pub text: Option<String>,
    pub attributes: HashMap<String, String>,
    /// Geometry samples; each read consumes one until a single one is left.
    pub geometry: VecDeque<BoundingBox>,
}

impl ElementState {
    pub fn visible() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_box(mut self, geometry: BoundingBox) -> Self {
        self.geometry = VecDeque::from([geometry]);
        self
    }

    /// Replay `samples` on successive geometry reads, then hold the last one.
    pub fn with_geometry_sequence(mut self, samples: impl IntoIterator<Item = BoundingBox>) -> Self {
        self.geometry = samples.into_iter().collect();
        self
    }
}

/// In-memory [`Driver`] over a mutable element table
#[derive(Debug, Default)]
pub struct MemoryDriver {
    elements: RwLock<HashMap<Locator, ElementState>>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(self, locator: Locator, state: ElementState) -> Self {
        self.insert(locator, state);
        self
    }

    pub fn insert(&self, locator: Locator, state: ElementState) {
        self.elements.write().insert(locator, state);
    }

    pub fn remove(&self, locator: &Locator) -> Option<ElementState> {
        self.elements.write().remove(locator)
    }

    /// Mutate an element in place; returns false if it does not exist.
    pub fn update(&self, locator: &Locator, f: impl FnOnce(&mut ElementState)) -> bool {
        match self.elements.write().get_mut(locator) {
            Some(state) => {
                f(state);
                true
            }
            None => false,
        }
    }

    fn read<T>(
        &self,
        locator: &Locator,
        f: impl FnOnce(&ElementState) -> T,
    ) -> Result<T, DriverError> {
        self.elements
            .read()
            .get(locator)
            .map(f)
            .ok_or_else(|| DriverError::NotFound(locator.to_string()))
    }
}

impl Driver for MemoryDriver {
    fn is_visible<'a>(&'a self, locator: &'a Locator) -> DriverFuture<'a, bool> {
        let visible = self
            .elements
            .read()
            .get(locator)
            .is_some_and(|e| e.visible);
        Box::pin(async move { Ok(visible) })
    }

    fn bounding_box<'a>(&'a self, locator: &'a Locator) -> DriverFuture<'a, Option<BoundingBox>> {
        let geometry = self
            .elements
            .write()
            .get_mut(locator)
            .filter(|e| e.visible)
            .and_then(|e| {
                if e.geometry.len() > 1 {
                    e.geometry.pop_front()
                } else {
                    e.geometry.front().copied()
                }
            });
        Box::pin(async move { Ok(geometry) })
    }

    fn text_content<'a>(&'a self, locator: &'a Locator) -> DriverFuture<'a, Option<String>> {
        let text = self.read(locator, |e| e.text.clone());
        Box::pin(async move { text })
    }

    fn attribute<'a>(
        &'a self,
        locator: &'a Locator,
        name: &'a str,
    ) -> DriverFuture<'a, Option<String>> {
        let value = self.read(locator, |e| e.attributes.get(name).cloned());
        Box::pin(async move { value })
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
