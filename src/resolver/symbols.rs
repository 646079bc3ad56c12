use std::sync::Arc;

use crate::{
    mapping::{ClassMapping, MappingIndex},
    resolver::descriptor::method_descriptor,
    types::{canonical_name_of, TypeDesc, TypeMirror},
};

/// Translates symbol names between the canonical scheme calling code uses and
/// the native scheme of the running host.
///
/// Every member lookup follows the same pass-through policy: absence of
/// mapping *data* — no dataset, no entry for the class, no entry for the
/// member, or a type that cannot be named — returns the queried name
/// unchanged. Translation never errors; whether the resulting name actually
/// exists on the host is the caller's (or the facade's) concern.
///
/// The resolver borrows the immutable [`MappingIndex`] and is itself
/// stateless, so it is cheap to construct per call site and safe to use from
/// any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct SymbolResolver<'index> {
    index: &'index MappingIndex,
}

impl<'index> SymbolResolver<'index> {
    /// Creates a resolver over a built mapping index.
    #[must_use]
    pub fn new(index: &'index MappingIndex) -> Self {
        SymbolResolver { index }
    }

    /// Translates a canonical class name to the host's native name.
    ///
    /// Pass-through on miss: the input is returned unchanged when no mapping
    /// applies.
    #[must_use]
    pub fn native_class_name(&self, canonical: &str) -> String {
        self.native_class_name_opt(canonical)
            .unwrap_or_else(|| canonical.to_string())
    }

    /// Translates a native class name back to its canonical form.
    ///
    /// Pass-through on miss.
    #[must_use]
    pub fn canonical_class_name(&self, native: &str) -> String {
        self.canonical_class_name_opt(native)
            .unwrap_or_else(|| native.to_string())
    }

    /// Translates a canonical field name to the host's native name for
    /// `ty`'s declaration of it.
    ///
    /// The class mapping is resolved from the live type (not by name
    /// mangling); any miss along the way — unnameable type, unmapped class,
    /// unmapped field — passes the queried name through unchanged.
    #[must_use]
    pub fn native_field_name(&self, ty: &dyn TypeMirror, canonical: &str) -> String {
        self.class_mapping_for(ty)
            .and_then(|class| class.field_by_canonical(canonical))
            .map_or_else(|| canonical.to_string(), |member| member.native_name.clone())
    }

    /// Translates a native field name back to its canonical form for `ty`'s
    /// declaration of it. Pass-through on miss.
    #[must_use]
    pub fn canonical_field_name(&self, ty: &dyn TypeMirror, native: &str) -> String {
        self.class_mapping_for(ty)
            .and_then(|class| class.field_by_native(native))
            .map_or_else(|| native.to_string(), |member| member.canonical_name.clone())
    }

    /// Translates a canonical method name to the host's native name,
    /// disambiguating overloads by parameter and return types.
    ///
    /// The lookup key embeds a canonical-form descriptor, so class-typed
    /// parameters given in the host's naming scheme are normalized first;
    /// names already canonical pass through the normalization untouched.
    /// Pass-through on miss.
    #[must_use]
    pub fn native_method_name(
        &self,
        ty: &dyn TypeMirror,
        canonical: &str,
        params: &[TypeDesc],
        return_type: &TypeDesc,
    ) -> String {
        let key = format!(
            "{}{}",
            canonical,
            self.canonical_descriptor(params, return_type)
        );

        self.class_mapping_for(ty)
            .and_then(|class| class.method_by_canonical(&key))
            .map_or_else(|| canonical.to_string(), |member| member.native_name.clone())
    }

    /// Translates a native method name back to its canonical form,
    /// disambiguating overloads by parameter and return types.
    ///
    /// Symmetric to [`SymbolResolver::native_method_name`], swapping which
    /// table is consulted and which direction the descriptor's class-name
    /// components translate in. Pass-through on miss.
    #[must_use]
    pub fn canonical_method_name(
        &self,
        ty: &dyn TypeMirror,
        native: &str,
        params: &[TypeDesc],
        return_type: &TypeDesc,
    ) -> String {
        let key = format!("{}{}", native, self.native_descriptor(params, return_type));

        self.class_mapping_for(ty)
            .and_then(|class| class.method_by_native(&key))
            .map_or_else(
                || native.to_string(),
                |member| member.canonical_name.clone(),
            )
    }

    /// Builds a method descriptor whose class-name components are in the
    /// host's native scheme.
    #[must_use]
    pub fn native_descriptor(&self, params: &[TypeDesc], return_type: &TypeDesc) -> String {
        method_descriptor(params, return_type, |path| self.native_class_name_opt(path))
    }

    /// Builds a method descriptor whose class-name components are in the
    /// canonical scheme.
    #[must_use]
    pub fn canonical_descriptor(&self, params: &[TypeDesc], return_type: &TypeDesc) -> String {
        method_descriptor(params, return_type, |path| {
            self.canonical_class_name_opt(path)
        })
    }

    fn native_class_name_opt(&self, canonical: &str) -> Option<String> {
        self.index
            .class_by_canonical(canonical)
            .map(|class| class.native_name.clone())
    }

    fn canonical_class_name_opt(&self, native: &str) -> Option<String> {
        self.index
            .class_by_native(native)
            .map(|class| class.canonical_name.clone())
    }

    /// Classifies a live type against the index, honoring the detected
    /// naming mode of the host.
    fn class_mapping_for(&self, ty: &dyn TypeMirror) -> Option<&'index Arc<ClassMapping>> {
        let name = canonical_name_of(ty)?;

        self.index.class_for_live_name(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mapping::{ClassRecord, MemberMapping},
        test::MirrorSpec,
        types::PrimitiveKind,
    };

    fn index() -> MappingIndex {
        MappingIndex::with_mode(
            Some(vec![
                ClassRecord {
                    native_name: "a1".to_string(),
                    canonical_name: "pkg.Foo".to_string(),
                    methods: vec![
                        MemberMapping::method("c", "doThing", "(I)V", "(I)V"),
                        MemberMapping::method(
                            "d",
                            "doThing",
                            "(Ljava/lang/String;)V",
                            "(Ljava/lang/String;)V",
                        ),
                        MemberMapping::method("e", "child", "()La2;", "()Lpkg/Bar;"),
                    ],
                    fields: vec![MemberMapping::field("f", "bar")],
                },
                ClassRecord {
                    native_name: "a2".to_string(),
                    canonical_name: "pkg.Bar".to_string(),
                    methods: vec![],
                    fields: vec![],
                },
            ]),
            false,
        )
    }

    #[test]
    fn class_names_round_trip() {
        let index = index();
        let resolver = SymbolResolver::new(&index);

        assert_eq!(resolver.native_class_name("pkg.Foo"), "a1");
        assert_eq!(resolver.canonical_class_name("a1"), "pkg.Foo");
    }

    #[test]
    fn unknown_class_name_passes_through() {
        let index = index();
        let resolver = SymbolResolver::new(&index);

        assert_eq!(resolver.native_class_name("pkg.Unknown"), "pkg.Unknown");
        assert_eq!(resolver.canonical_class_name("zz"), "zz");
    }

    #[test]
    fn pass_through_index_is_identity_everywhere() {
        let index = MappingIndex::with_mode(None, false);
        let resolver = SymbolResolver::new(&index);
        let ty = MirrorSpec::class("pkg.Foo").build();

        assert_eq!(resolver.native_class_name("pkg.Foo"), "pkg.Foo");
        assert_eq!(resolver.native_field_name(ty.as_ref(), "bar"), "bar");
        assert_eq!(
            resolver.native_method_name(
                ty.as_ref(),
                "doThing",
                &[PrimitiveKind::I4.into()],
                &PrimitiveKind::Void.into()
            ),
            "doThing"
        );
    }

    #[test]
    fn field_names_resolve_in_both_directions() {
        let index = index();
        let resolver = SymbolResolver::new(&index);
        // Host runs natively, so the live type carries the native name.
        let ty = MirrorSpec::class("a1").build();

        assert_eq!(resolver.native_field_name(ty.as_ref(), "bar"), "f");
        assert_eq!(resolver.canonical_field_name(ty.as_ref(), "f"), "bar");
    }

    #[test]
    fn unmapped_class_passes_every_member_through() {
        let index = index();
        let resolver = SymbolResolver::new(&index);
        let ty = MirrorSpec::class("pkg.NoMapping").build();

        assert_eq!(resolver.native_field_name(ty.as_ref(), "bar"), "bar");
        assert_eq!(
            resolver.native_method_name(
                ty.as_ref(),
                "doThing",
                &[PrimitiveKind::I4.into()],
                &PrimitiveKind::Void.into()
            ),
            "doThing"
        );
    }

    #[test]
    fn unnameable_type_passes_through() {
        let index = index();
        let resolver = SymbolResolver::new(&index);
        let ty = MirrorSpec::class("a1").unnameable().build();

        assert_eq!(resolver.native_field_name(ty.as_ref(), "bar"), "bar");
    }

    #[test]
    fn overloads_resolve_independently() {
        let index = index();
        let resolver = SymbolResolver::new(&index);
        let ty = MirrorSpec::class("a1").build();

        let by_int = resolver.native_method_name(
            ty.as_ref(),
            "doThing",
            &[PrimitiveKind::I4.into()],
            &PrimitiveKind::Void.into(),
        );
        let by_string = resolver.native_method_name(
            ty.as_ref(),
            "doThing",
            &[TypeDesc::class("java.lang.String")],
            &PrimitiveKind::Void.into(),
        );

        assert_eq!(by_int, "c");
        assert_eq!(by_string, "d");
    }

    #[test]
    fn method_descriptors_embed_translated_class_names() {
        let index = index();
        let resolver = SymbolResolver::new(&index);
        let ty = MirrorSpec::class("a1").build();

        // The caller names the return type canonically; the canonical-form
        // key must match the stored entry regardless.
        let native = resolver.native_method_name(
            ty.as_ref(),
            "child",
            &[],
            &TypeDesc::class("pkg.Bar"),
        );
        assert_eq!(native, "e");

        // Reverse direction: a live (native) return type is translated into
        // the native-form key.
        let canonical = resolver.canonical_method_name(
            ty.as_ref(),
            "e",
            &[],
            &TypeDesc::class("pkg.Bar"),
        );
        assert_eq!(canonical, "child");
    }

    #[test]
    fn canonical_mode_classifies_by_canonical_name_first() {
        let records = vec![ClassRecord {
            native_name: "a1".to_string(),
            canonical_name: "pkg.Foo".to_string(),
            methods: vec![],
            fields: vec![MemberMapping::field("f", "bar")],
        }];
        let index = MappingIndex::with_mode(Some(records), true);
        let resolver = SymbolResolver::new(&index);
        // In a canonically named host the live type carries the canonical name.
        let ty = MirrorSpec::class("pkg.Foo").build();

        assert_eq!(resolver.native_field_name(ty.as_ref(), "bar"), "f");
    }
}
