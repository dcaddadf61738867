use crate::descriptor::field_descriptor::{FieldDescriptor, FieldEquality};
use crate::error::IntrospectionError;
use crate::traits::reflect::Reflect;

/// The ordered fields of `T`, in declaration order.
pub struct Fields<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> Fields<T> {
    pub fn new() -> Self {
        Fields { fields: Vec::new() }
    }

    /// Appends a field declared directly on `T`.
    pub fn field<F: 'static>(
        mut self,
        name: &str,
        access: fn(&T) -> &F,
        equality: FieldEquality<F>,
    ) -> Self {
        self.fields.push(FieldDescriptor::new(name, access, equality));
        self
    }

    /// Splices in every field of the ancestor `B` that `T` embeds as `name`.
    /// The spliced fields are named `name.field`.
    pub fn flatten<B: Reflect>(
        mut self,
        name: &str,
        project: fn(&T) -> &B,
    ) -> Result<Self, IntrospectionError> {
        let ancestor =
            B::fields().map_err(|source| IntrospectionError::Ancestor {
                type_name: core::any::type_name::<T>(),
                field: name.to_string(),
                source: Box::new(source),
            })?;
        self.fields.extend(
            ancestor
                .into_iter()
                .map(|field| field.nest_under(name, project)),
        );
        Ok(self)
    }
}

impl<T: 'static> Default for Fields<T> {
    fn default() -> Self {
        Fields::new()
    }
}

impl<T> Fields<T> {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, FieldDescriptor<T>> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

impl<T> IntoIterator for Fields<T> {
    type Item = FieldDescriptor<T>;
    type IntoIter = alloc::vec::IntoIter<FieldDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Fields<T> {
    type Item = &'a FieldDescriptor<T>;
    type IntoIter = core::slice::Iter<'a, FieldDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<T> Clone for Fields<T> {
    fn clone(&self) -> Self {
        Fields {
            fields: self.fields.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Fields<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}
