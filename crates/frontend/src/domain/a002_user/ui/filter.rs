use contracts::domain::a002_user::aggregate::User;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::domain::a002_user::api::fetch_all_users;
use crate::shared::components::multi_select::*;
use crate::shared::config::use_app_config;
use crate::shared::lazy_options::LazyOptions;

pub const USER_KEYS: OptionKeys<User> = OptionKeys::new(|u| u.id.clone(), User::full_name);

/// Multi-select over all users, labelled "first last"
pub fn user_filter_handle(on_change: Callback<HashSet<String>>) -> MultiSelectHandle {
    let config = use_app_config();
    let source = LazyOptions::new("user");

    let on_open = Callback::new(move |_| {
        let endpoint = config.graphql_endpoint.clone();
        let page_size = config.dropdown_page_size;
        source.load_once(move || async move {
            let users = fetch_all_users(endpoint, page_size).await?;
            Ok(USER_KEYS.normalize(&users))
        });
    });

    MultiSelectHandle::new(source.options(), on_change)
        .placeholder("Select Users")
        .selected_label("Users selected")
        .loading(source.loading())
        .error(source.error())
        .on_open(on_open)
}

#[component]
pub fn UserFilter(handle: MultiSelectHandle) -> impl IntoView {
    view! {
        <MultiSelect handle=handle class="filter-select">
            <MultiSelectTrigger handle=handle />
            <MultiSelectContent handle=handle>
                <MultiSelectSearch handle=handle placeholder="Search users" />
                <MultiSelectSelectAll handle=handle label="Select all users" />
                <MultiSelectOptionsList
                    handle=handle
                    empty_message="No users found"
                    no_options_message="No users available"
                />
                <MultiSelectFooter handle=handle />
            </MultiSelectContent>
        </MultiSelect>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{provide_app_config, AppConfig};
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_trigger_shows_users_placeholder() {
        let owner = Owner::new();
        owner.with(|| {
            provide_app_config(AppConfig::with_endpoint("http://localhost:4000/graphql"));
            let handle = user_filter_handle(Callback::new(|_| {}));
            assert_eq!(handle.trigger_label(), "Select Users");
        });
    }

    #[test]
    fn test_users_labelled_by_full_name() {
        let users = vec![
            User {
                id: "u1".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: None,
            },
            User {
                id: "u1".into(),
                first_name: "Duplicate".into(),
                last_name: "Entry".into(),
                email: None,
            },
        ];
        assert_eq!(
            USER_KEYS.normalize(&users),
            vec![SelectOption::new("u1", "Ada Lovelace")]
        );
    }
}
