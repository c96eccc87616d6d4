use speculate2::speculate;
use test_hierarchy::codec::{self, Format};
use test_hierarchy::models::*;
use test_hierarchy::ModelError;

fn login_model() -> HierarchyModel {
    HierarchyModel::with_test_plans(
        1,
        "Root",
        vec![TestPlan::with_functionalities(
            1,
            "Plan A",
            vec![Functionality::with_scenarios(
                1,
                "Login",
                vec![Scenario::with_steps(
                    1,
                    "Valid login",
                    vec![Step::new(1, "Enter username"), Step::new(2, "Submit")],
                )],
            )],
        )],
    )
}

fn round_trip<T>(record: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = codec::to_json(record, Format::Compact).expect("Failed to encode");
    codec::from_json(&json).expect("Failed to decode")
}

speculate! {
    describe "round trip" {
        it "preserves a step" {
            let step = Step::new(42, "Click the button");
            assert_eq!(round_trip(&step), step);
        }

        it "preserves every level of a populated hierarchy" {
            let model = login_model();
            let decoded = round_trip(&model);
            assert_eq!(decoded, model);

            let plan = &decoded.test_plans()[0];
            assert_eq!(plan.name, "Plan A");
            let functionality = &plan.functionalities()[0];
            assert_eq!(functionality.name, "Login");
            let scenario = &functionality.scenarios()[0];
            assert_eq!(scenario.name, "Valid login");
            assert_eq!(scenario.steps().len(), 2);
            assert_eq!(scenario.steps()[0], Step::new(1, "Enter username"));
            assert_eq!(scenario.steps()[1], Step::new(2, "Submit"));
        }

        it "survives pretty output too" {
            let model = login_model();
            let json = codec::to_json(&model, Format::Pretty).expect("Failed to encode");
            assert!(json.contains('\n'));
            assert_eq!(codec::from_json::<HierarchyModel>(&json).expect("Failed to decode"), model);
        }

        it "keeps step order" {
            let scenario = Scenario::with_steps(1, "s", vec![Step::new(1, "a"), Step::new(2, "b")]);
            let decoded = round_trip(&scenario);
            assert_eq!(decoded.steps()[0].id, 1);
            assert_eq!(decoded.steps()[1].id, 2);
        }

        it "keeps order that is not sorted by id" {
            let plan = TestPlan::with_functionalities(1, "p", vec![
                Functionality::new(3, "c"),
                Functionality::new(1, "a"),
                Functionality::new(2, "b"),
            ]);
            let ids: Vec<i64> = round_trip(&plan).functionalities().iter().map(|f| f.id).collect();
            assert_eq!(ids, vec![3, 1, 2]);
        }

        it "preserves names verbatim" {
            let step = Step::new(-5, "  émoji 🚀 \"quoted\"\n");
            assert_eq!(round_trip(&step), step);
        }
    }

    describe "wire shape" {
        it "uses the documented field names" {
            let value = serde_json::to_value(login_model()).expect("Failed to encode");
            let plan = &value["testPlans"][0];
            let functionality = &plan["functionalities"][0];
            let scenario = &functionality["scenarios"][0];

            assert_eq!(value["id"], 1);
            assert_eq!(value["name"], "Root");
            assert_eq!(plan["name"], "Plan A");
            assert_eq!(functionality["name"], "Login");
            assert_eq!(scenario["steps"][1]["name"], "Submit");
        }

        it "decodes hand-written input" {
            let json = r#"{
                "id": 1,
                "name": "Root",
                "testPlans": [
                    { "id": 1, "name": "Plan A", "functionalities": [
                        { "id": 1, "name": "Login", "scenarios": [
                            { "id": 1, "name": "Valid login", "steps": [
                                { "id": 1, "name": "Enter username" },
                                { "id": 2, "name": "Submit" }
                            ] }
                        ] }
                    ] }
                ]
            }"#;
            let model: HierarchyModel = codec::from_json(json).expect("Failed to decode");
            assert_eq!(model, login_model());
        }

        it "requires the camelCase spelling of test plans" {
            let json = r#"{ "id": 1, "name": "Root", "test_plans": [] }"#;
            let err = codec::from_json::<HierarchyModel>(json).unwrap_err();
            assert!(err.is_validation());
        }
    }

    describe "empty and absent children" {
        it "accepts an empty child list" {
            let scenario: Scenario = codec::from_json(r#"{ "id": 1, "name": "s", "steps": [] }"#)
                .expect("Failed to decode");
            assert!(scenario.steps().is_empty());
        }

        it "rejects an absent child list" {
            let json = r#"{ "id": 1, "name": "s" }"#;
            assert!(codec::from_json::<Scenario>(json).unwrap_err().is_validation());
            assert!(codec::from_json::<Functionality>(json).unwrap_err().is_validation());
            assert!(codec::from_json::<TestPlan>(json).unwrap_err().is_validation());
            assert!(codec::from_json::<HierarchyModel>(json).unwrap_err().is_validation());
        }

        it "rejects a null child list" {
            let err = codec::from_json::<Scenario>(r#"{ "id": 1, "name": "s", "steps": null }"#).unwrap_err();
            assert!(err.is_validation());
        }
    }

    describe "required fields" {
        it "rejects a missing name instead of defaulting it" {
            let err = codec::from_json::<Step>(r#"{ "id": 1 }"#).unwrap_err();
            assert!(matches!(err, ModelError::Validation(_)));
            assert!(err.to_string().contains("name"));
        }

        it "rejects a missing name deep in the tree" {
            let json = r#"{ "id": 1, "name": "Root", "testPlans": [
                { "id": 1, "name": "Plan A", "functionalities": [
                    { "id": 1, "name": "Login", "scenarios": [
                        { "id": 1, "name": "Valid login", "steps": [ { "id": 2 } ] }
                    ] }
                ] }
            ] }"#;
            assert!(codec::from_json::<HierarchyModel>(json).unwrap_err().is_validation());
        }

        it "rejects a missing id" {
            let err = codec::from_json::<TestPlan>(r#"{ "name": "p", "functionalities": [] }"#).unwrap_err();
            assert!(err.is_validation());
        }

        it "rejects a non-integer id" {
            let err = codec::from_json::<Functionality>(r#"{ "id": "one", "name": "f", "scenarios": [] }"#).unwrap_err();
            assert!(err.is_validation());
        }

        it "rejects a numeric name" {
            let err = codec::from_json::<Step>(r#"{ "id": 1, "name": 7 }"#).unwrap_err();
            assert!(err.is_validation());
        }

        it "separates malformed text from bad shape" {
            let err = codec::from_json::<Step>("{ id: 1 }").unwrap_err();
            assert!(matches!(err, ModelError::Syntax(_)));
        }
    }

    describe "sibling ids" {
        it "allows the same id on every level" {
            let model = login_model();
            let plan = &model.test_plans()[0];
            assert_eq!(plan.id, 1);
            assert_eq!(plan.functionalities()[0].id, 1);
            assert_eq!(round_trip(&model), model);
        }

        it "does not reject repeated sibling ids at construction" {
            let scenario: Scenario = codec::from_json(
                r#"{ "id": 1, "name": "s", "steps": [ { "id": 1, "name": "a" }, { "id": 1, "name": "b" } ] }"#,
            ).expect("Failed to decode");
            assert_eq!(scenario.steps().len(), 2);
        }
    }

    describe "json schema" {
        it "marks id, name and children as required" {
            let schema = serde_json::to_value(schemars::schema_for!(Scenario)).expect("Failed to encode schema");
            let required: Vec<&str> = schema["required"]
                .as_array()
                .expect("required list")
                .iter()
                .filter_map(|v| v.as_str())
                .collect();
            assert!(required.contains(&"id"));
            assert!(required.contains(&"name"));
            assert!(required.contains(&"steps"));
        }

        it "names the root children testPlans" {
            let schema = serde_json::to_value(schemars::schema_for!(HierarchyModel)).expect("Failed to encode schema");
            assert!(schema["properties"].get("testPlans").is_some());
        }
    }
}
