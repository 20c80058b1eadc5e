//! Diesel table definitions for the advocate directory schema.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Directory entries. Specialties live in `advocate_specialties`.
    advocates (id) {
        id -> Int4,
        first_name -> Text,
        last_name -> Text,
        city -> Text,
        degree -> Text,
        /// Non-negative, enforced by a check constraint.
        years_of_experience -> Int4,
        phone_number -> Int8,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Specialty catalogue; names are unique.
    specialties (id) {
        id -> Int4,
        name -> Text,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Many-to-many association; rows cascade with either parent.
    advocate_specialties (advocate_id, specialty_id) {
        advocate_id -> Int4,
        specialty_id -> Int4,
    }
}

diesel::joinable!(advocate_specialties -> advocates (advocate_id));
diesel::joinable!(advocate_specialties -> specialties (specialty_id));

diesel::allow_tables_to_appear_in_same_query!(advocates, specialties, advocate_specialties);
