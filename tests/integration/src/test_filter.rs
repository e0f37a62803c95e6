//! Builder-rendered filters evaluated by a live DynamoDB endpoint.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aws_sdk_dynamodb::types::AttributeValue as SdkValue;
    use dynafilter_core::{Conjunction, ExpressionBuilder, SubstitutionConfig};
    use dynafilter_model::AttributeType;

    use crate::{
        cleanup_table, create_samples_table, dynamodb_client, sdk_names, sdk_values,
        test_table_name,
    };

    type Item = HashMap<String, SdkValue>;

    /// Put ten items under partition `1`: `SK_i`, `Name_i`, `Age = i`; even
    /// items carry a `Tags` string set and item 10 a `Deleted` flag.
    async fn seed_samples(client: &aws_sdk_dynamodb::Client, table_name: &str) {
        for i in 1..=10 {
            let mut req = client
                .put_item()
                .table_name(table_name)
                .item("PK", SdkValue::S("1".to_owned()))
                .item("SK", SdkValue::S(format!("SK_{i}")))
                .item("Name", SdkValue::S(format!("Name_{i}")))
                .item("Age", SdkValue::N(i.to_string()));
            if i % 2 == 0 {
                req = req.item("Tags", SdkValue::Ss(vec!["even".to_owned(), format!("n{i}")]));
            }
            if i == 10 {
                req = req.item("Deleted", SdkValue::Bool(true));
            }
            req.send()
                .await
                .unwrap_or_else(|e| panic!("failed to put item {i}: {e}"));
        }
    }

    /// Query partition `1` with the builder's AND-joined filter.
    async fn query_partition(
        client: &aws_sdk_dynamodb::Client,
        table_name: &str,
        builder: &ExpressionBuilder,
    ) -> Vec<Item> {
        let filter = builder
            .to_filter(Conjunction::And, &SubstitutionConfig::from_env())
            .unwrap();

        let mut names = sdk_names(&filter).unwrap_or_default();
        names.insert("#pk".to_owned(), "PK".to_owned());
        let mut values = sdk_values(&filter).unwrap_or_default();
        values.insert(":pk".to_owned(), SdkValue::S("1".to_owned()));

        let resp = client
            .query()
            .table_name(table_name)
            .key_condition_expression("#pk = :pk")
            .filter_expression(&filter.filter_expression)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .send()
            .await
            .unwrap_or_else(|e| panic!("query failed for {}: {e}", filter.filter_expression));

        resp.items().to_vec()
    }

    fn names_of(items: &[Item]) -> Vec<String> {
        let mut names: Vec<String> = items
            .iter()
            .filter_map(|item| item.get("Name")?.as_s().ok().cloned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_filter_by_equal() {
        let client = dynamodb_client();
        let table_name = test_table_name("equal");
        create_samples_table(&client, &table_name).await.unwrap();
        seed_samples(&client, &table_name).await;

        let mut b = ExpressionBuilder::new();
        b.equal("Name", "Name_1");
        let items = query_partition(&client, &table_name, &b).await;

        assert_eq!(names_of(&items), ["Name_1"]);

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_filter_by_membership() {
        let client = dynamodb_client();
        let table_name = test_table_name("in");
        create_samples_table(&client, &table_name).await.unwrap();
        seed_samples(&client, &table_name).await;

        let mut b = ExpressionBuilder::new();
        b.is_in("Name", ["Name_2", "Name_3", "Name_4"]);
        let items = query_partition(&client, &table_name, &b).await;

        assert_eq!(names_of(&items), ["Name_2", "Name_3", "Name_4"]);

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_filter_by_range_and_nested_or() {
        let client = dynamodb_client();
        let table_name = test_table_name("nested");
        create_samples_table(&client, &table_name).await.unwrap();
        seed_samples(&client, &table_name).await;

        let mut either = ExpressionBuilder::new();
        either.equal("Name", "Name_3").equal("Name", "Name_8");

        let mut b = ExpressionBuilder::new();
        b.between("Age", 2, 6)
            .append(either.join_or(), either.arguments().to_vec());
        let items = query_partition(&client, &table_name, &b).await;

        assert_eq!(names_of(&items), ["Name_3"]);

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_filter_by_prefix() {
        let client = dynamodb_client();
        let table_name = test_table_name("prefix");
        create_samples_table(&client, &table_name).await.unwrap();
        seed_samples(&client, &table_name).await;

        let mut b = ExpressionBuilder::new();
        b.begins_with("Name", "Name_1");
        let items = query_partition(&client, &table_name, &b).await;

        assert_eq!(names_of(&items), ["Name_1", "Name_10"]);

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_filter_by_existence_and_type() {
        let client = dynamodb_client();
        let table_name = test_table_name("exists");
        create_samples_table(&client, &table_name).await.unwrap();
        seed_samples(&client, &table_name).await;

        let mut b = ExpressionBuilder::new();
        b.attribute_not_exists("Deleted")
            .attribute_type("Tags", AttributeType::Ss)
            .contains("Tags", "even");
        let items = query_partition(&client, &table_name, &b).await;

        assert_eq!(names_of(&items), ["Name_2", "Name_4", "Name_6", "Name_8"]);

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_filter_by_comparison_operator() {
        let client = dynamodb_client();
        let table_name = test_table_name("op");
        create_samples_table(&client, &table_name).await.unwrap();
        seed_samples(&client, &table_name).await;

        let mut b = ExpressionBuilder::new();
        b.op("Age", dynafilter_model::ComparisonOperator::Gt, 8)
            .attribute_exists("Tags");
        let items = query_partition(&client, &table_name, &b).await;

        assert_eq!(names_of(&items), ["Name_10"]);

        cleanup_table(&client, &table_name).await;
    }
}
