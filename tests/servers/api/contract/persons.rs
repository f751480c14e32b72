use phonebook::servers::apis::context::persons::forms::ContactForm;
use phonebook::servers::apis::context::persons::resources::Contact;
use phonebook_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::asserts::{
    assert_contact, assert_contact_list, assert_internal_server_error, assert_invalid_json_body, assert_malformed_id,
    assert_no_content, assert_not_found, assert_validation_error,
};
use crate::servers::api::client::{contact_form, Client};
use crate::servers::api::contract::fixtures::{malformed_ids, unknown_id};
use crate::servers::api::{force_database_error, Started};

mod listing_contacts {

    use super::*;

    #[tokio::test]
    async fn should_return_an_empty_list_when_there_are_no_contacts() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info()).get_contacts().await;

        assert_contact_list(response, vec![]).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_allow_listing_all_the_contacts_in_the_order_they_were_added() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let first = env.add_contact("Arto Hellas", "040-123456").await;
        let second = env.add_contact("Ada Lovelace", "39-445323523").await;

        let response = Client::new(env.get_connection_info()).get_contacts().await;

        assert_contact_list(response, vec![Contact::from(first), Contact::from(second)]).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_contacts_cannot_be_loaded() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        force_database_error(&env.phonebook);

        let response = Client::new(env.get_connection_info()).get_contacts().await;

        assert_internal_server_error(response).await;

        env.stop().await;
    }
}

mod getting_a_contact {

    use super::*;

    #[tokio::test]
    async fn should_allow_getting_a_contact() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let contact = env.add_contact("Ada Lovelace", "040-1234567").await;

        let response = Client::new(env.get_connection_info())
            .get_contact(&contact.id.to_string())
            .await;

        let resource = assert_contact(response, "Ada Lovelace", "040-1234567").await;
        assert_eq!(resource.id, contact.id.to_string());

        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_not_found_when_the_contact_does_not_exist() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info()).get_contact(&unknown_id()).await;

        assert_not_found(response).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_id_is_malformed() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        for malformed_id in &malformed_ids() {
            let response = Client::new(env.get_connection_info()).get_contact(malformed_id).await;

            assert_malformed_id(response).await;
        }

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_contact_cannot_be_loaded() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        force_database_error(&env.phonebook);

        let response = Client::new(env.get_connection_info()).get_contact(&unknown_id()).await;

        assert_internal_server_error(response).await;

        env.stop().await;
    }
}

mod adding_a_contact {

    use super::*;

    #[tokio::test]
    async fn should_allow_adding_a_contact_that_can_be_fetched_afterwards() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        let response = client.add_contact(&contact_form("Ada Lovelace", "040-1234567")).await;

        let created = assert_contact(response, "Ada Lovelace", "040-1234567").await;
        assert!(!created.id.is_empty());

        let response = client.get_contact(&created.id).await;

        let fetched = assert_contact(response, "Ada Lovelace", "040-1234567").await;
        assert_eq!(fetched, created);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_allow_adding_contacts_with_the_same_name() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        let first = assert_contact(
            client.add_contact(&contact_form("Ada Lovelace", "040-1234567")).await,
            "Ada Lovelace",
            "040-1234567",
        )
        .await;
        let second = assert_contact(
            client.add_contact(&contact_form("Ada Lovelace", "040-1234567")).await,
            "Ada Lovelace",
            "040-1234567",
        )
        .await;

        assert_ne!(first.id, second.id);
        assert_eq!(env.phonebook.count_contacts().await.unwrap(), 2);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_allow_adding_a_contact_with_a_short_number() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .add_contact(&contact_form("Ada Lovelace", "123"))
            .await;

        assert_validation_error(
            response,
            "Contact validation failed: number: Path `number` (`123`) is shorter than the minimum allowed length (8).",
        )
        .await;
        assert_eq!(env.phonebook.count_contacts().await.unwrap(), 0);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_allow_adding_a_contact_with_a_malformed_number() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .add_contact(&contact_form("Ada Lovelace", "12-34-5678"))
            .await;

        assert_validation_error(
            response,
            "Contact validation failed: number: `12-34-5678` is not a valid phone number!",
        )
        .await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_allow_adding_a_contact_without_a_name() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        let missing_name = ContactForm {
            name: None,
            number: Some("040-1234567".to_owned()),
        };

        assert_validation_error(
            client.add_contact(&missing_name).await,
            "Contact validation failed: name: Path `name` is required.",
        )
        .await;

        assert_validation_error(
            client.add_contact(&contact_form("", "040-1234567")).await,
            "Contact validation failed: name: Path `name` is required.",
        )
        .await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_report_every_invalid_field() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .add_contact(&ContactForm::default())
            .await;

        assert_validation_error(
            response,
            "Contact validation failed: name: Path `name` is required., number: Path `number` is required.",
        )
        .await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_body_is_not_a_json_object() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let client = Client::new(env.get_connection_info());

        assert_invalid_json_body(client.post_raw("api/persons", "not json", "application/json").await).await;
        assert_invalid_json_body(
            client
                .post_raw("api/persons", r#"{"name":"Ada Lovelace","number":"040-1234567"}"#, "text/plain")
                .await,
        )
        .await;

        assert_eq!(env.phonebook.count_contacts().await.unwrap(), 0);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_contact_cannot_be_stored() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        force_database_error(&env.phonebook);

        let response = Client::new(env.get_connection_info())
            .add_contact(&contact_form("Ada Lovelace", "040-1234567"))
            .await;

        assert_internal_server_error(response).await;

        env.stop().await;
    }
}

mod updating_a_contact {

    use super::*;

    #[tokio::test]
    async fn should_allow_updating_the_number_of_a_contact() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let contact = env.add_contact("Ada Lovelace", "040-1234567").await;
        let id = contact.id.to_string();

        let client = Client::new(env.get_connection_info());

        let response = client.update_contact(&id, &contact_form("Ada Lovelace", "09-7654321")).await;

        let updated = assert_contact(response, "Ada Lovelace", "09-7654321").await;
        assert_eq!(updated.id, id);

        let response = client.get_contact(&id).await;

        assert_contact(response, "Ada Lovelace", "09-7654321").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_change_the_name_of_a_contact() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let contact = env.add_contact("Ada Lovelace", "040-1234567").await;

        let response = Client::new(env.get_connection_info())
            .update_contact(&contact.id.to_string(), &contact_form("Grace Hopper", "09-7654321"))
            .await;

        assert_contact(response, "Ada Lovelace", "09-7654321").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_not_found_when_the_contact_does_not_exist() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(env.get_connection_info())
            .update_contact(&unknown_id(), &contact_form("Ada Lovelace", "09-7654321"))
            .await;

        assert_not_found(response).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_allow_an_invalid_number() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let contact = env.add_contact("Ada Lovelace", "040-1234567").await;
        let id = contact.id.to_string();

        let client = Client::new(env.get_connection_info());

        assert_validation_error(
            client.update_contact(&id, &contact_form("Ada Lovelace", "123")).await,
            "Contact validation failed: number: Path `number` (`123`) is shorter than the minimum allowed length (8).",
        )
        .await;

        let missing_number = ContactForm {
            name: Some("Ada Lovelace".to_owned()),
            number: None,
        };

        assert_validation_error(
            client.update_contact(&id, &missing_number).await,
            "Contact validation failed: number: Path `number` is required.",
        )
        .await;

        assert_contact(client.get_contact(&id).await, "Ada Lovelace", "040-1234567").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_id_is_malformed() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        for malformed_id in &malformed_ids() {
            let response = Client::new(env.get_connection_info())
                .update_contact(malformed_id, &contact_form("Ada Lovelace", "09-7654321"))
                .await;

            assert_malformed_id(response).await;
        }

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_contact_cannot_be_updated() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        force_database_error(&env.phonebook);

        let response = Client::new(env.get_connection_info())
            .update_contact(&unknown_id(), &contact_form("Ada Lovelace", "09-7654321"))
            .await;

        assert_internal_server_error(response).await;

        env.stop().await;
    }
}

mod deleting_a_contact {

    use super::*;

    #[tokio::test]
    async fn should_allow_deleting_a_contact() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let contact = env.add_contact("Ada Lovelace", "040-1234567").await;
        let id = contact.id.to_string();

        let client = Client::new(env.get_connection_info());

        assert_no_content(client.delete_contact(&id).await).await;

        assert_not_found(client.get_contact(&id).await).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_succeed_deleting_the_same_contact_twice() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        let contact = env.add_contact("Ada Lovelace", "040-1234567").await;
        let id = contact.id.to_string();

        let client = Client::new(env.get_connection_info());

        assert_no_content(client.delete_contact(&id).await).await;
        assert_no_content(client.delete_contact(&id).await).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_id_is_malformed() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        for malformed_id in &malformed_ids() {
            let response = Client::new(env.get_connection_info()).delete_contact(malformed_id).await;

            assert_malformed_id(response).await;
        }

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fail_when_the_contact_cannot_be_removed() {
        INIT.call_once(|| {
            tracing_stderr_init(LevelFilter::ERROR);
        });

        let env = Started::new(&configuration::ephemeral().into()).await;

        force_database_error(&env.phonebook);

        let response = Client::new(env.get_connection_info()).delete_contact(&unknown_id()).await;

        assert_internal_server_error(response).await;

        env.stop().await;
    }
}
