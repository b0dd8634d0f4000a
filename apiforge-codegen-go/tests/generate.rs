//! Integration tests over the rendered and written Go project.

use std::str::FromStr;

use apiforge_codegen_go::Generator;
use apiforge_ir::{Project, lower};
use apiforge_schema::Schema;
use tempfile::TempDir;

const SHOP_SCHEMA: &str = r#"{
    "version": "1.0",
    "tables": [
        {
            "name": "product",
            "description": "product catalog",
            "primaryKey": "id",
            "fields": [
                {"name": "id", "type": "number", "autoIncrement": true},
                {"name": "sku", "type": "string", "length": 64, "unique": true, "required": true},
                {"name": "name", "type": "string", "required": true},
                {"name": "price", "type": "float", "required": true},
                {"name": "in_stock", "type": "boolean"}
            ]
        },
        {
            "name": "category",
            "fields": [
                {"name": "title", "type": "string"}
            ]
        }
    ],
    "relations": [
        {"from": "category", "to": "product", "type": "one-to-many", "foreignKey": "category_id", "referenceKey": "id"}
    ]
}"#;

fn shop_project() -> Project {
    lower(&Schema::from_str(SHOP_SCHEMA).expect("schema should validate"))
}

/// Render the full artifact list for a schema.
fn generate_files(project: &Project) -> Vec<(String, String)> {
    Generator::new(project, "example-api")
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{path} not found"))
}

#[test]
fn test_emits_expected_file_set() {
    let project = shop_project();
    let files = generate_files(&project);
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();

    for expected in [
        "go.mod",
        "models/product.go",
        "models/category.go",
        "database/database.go",
        "database/product_repo.go",
        "database/category_repo.go",
        "handlers/response.go",
        "handlers/product_handler.go",
        "handlers/category_handler.go",
        "middleware/cors.go",
        "middleware/logger.go",
        "router/router.go",
        "main.go",
        "utils/utils.go",
    ] {
        assert!(paths.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_go_mod_declares_three_dependencies() {
    let project = shop_project();
    let files = generate_files(&project);
    let go_mod = get_file(&files, "go.mod");

    assert!(go_mod.contains("module example-api"));
    assert!(go_mod.contains("github.com/gin-gonic/gin"));
    assert!(go_mod.contains("github.com/glebarez/sqlite"));
    assert!(go_mod.contains("gorm.io/gorm"));
}

#[test]
fn test_model_struct_and_tags() {
    let project = shop_project();
    let files = generate_files(&project);
    let model = get_file(&files, "models/product.go");

    assert!(model.contains("type Product struct {"));
    assert!(model.contains("import \"time\""));
    assert!(model.contains("func (Product) TableName() string {"));
    assert!(model.contains("return \"product\""));
    assert!(model.contains(
        "Sku string `json:\"sku\" gorm:\"column:sku;type:varchar(64);uniqueIndex;not null\" binding:\"required,max=64\"`"
    ));
    assert!(model.contains("CreatedAt time.Time `json:\"created_at\" gorm:\"autoCreateTime\"`"));
    assert!(model.contains("UpdatedAt time.Time `json:\"updated_at\" gorm:\"autoUpdateTime\"`"));
}

#[test]
fn test_create_request_excludes_auto_fields() {
    let project = shop_project();
    let files = generate_files(&project);
    let model = get_file(&files, "models/product.go");

    let create = model
        .split("type CreateProductRequest struct {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("create request struct");

    // Auto-increment primary key and audit fields are not part of the
    // create shape.
    assert!(!create.contains("ID "));
    assert!(!create.contains("CreatedAt"));
    assert!(!create.contains("UpdatedAt"));
    assert!(create.contains("Sku"));
    assert!(create.contains("Price"));
    assert!(create.contains("InStock"));
}

#[test]
fn test_update_request_presence_rule() {
    let project = shop_project();
    let files = generate_files(&project);
    let model = get_file(&files, "models/product.go");

    // Strings stay plain, everything else is pointer-wrapped.
    assert!(model.contains("Sku string `json:\"sku\"`"));
    assert!(model.contains("Price *float64 `json:\"price\"`"));
    assert!(model.contains("InStock *bool `json:\"in_stock\"`"));

    // The sparse map enumerates every updatable column and omits unset ones.
    assert!(model.contains("func (r *UpdateProductRequest) Changes() map[string]any {"));
    assert!(model.contains("if r.Price != nil {"));
    assert!(model.contains("changes[\"price\"] = *r.Price"));
    assert!(model.contains("if r.Sku != \"\" {"));
    assert!(!model.contains("changes[\"created_at\"]"));
}

#[test]
fn test_query_params_defaults_and_clamp() {
    let project = shop_project();
    let files = generate_files(&project);
    let model = get_file(&files, "models/product.go");

    assert!(model.contains("func (p *QueryProductParams) Normalize() {"));
    assert!(model.contains("p.Page = 1"));
    assert!(model.contains("p.PageSize = 20"));
    assert!(model.contains("if p.PageSize > 100 {"));
    assert!(model.contains("p.PageSize = 100"));
}

#[test]
fn test_repository_list_semantics() {
    let project = shop_project();
    let files = generate_files(&project);
    let repo = get_file(&files, "database/product_repo.go");

    // Keyword search ORs across every string business field.
    assert!(repo.contains("sku LIKE ? OR name LIKE ?"));
    // Default sort: primary key descending.
    assert!(repo.contains("query.Order(\"id DESC\")"));
    assert!(repo.contains("params.Normalize()"));
    // Not-found is distinct from storage errors.
    assert!(repo.contains("return nil, ErrNotFound"));
    assert!(repo.contains("if result.RowsAffected == 0 {"));
}

#[test]
fn test_repository_without_string_fields_skips_keyword_filter() {
    let schema = Schema::from_str(
        r#"{
            "version": "1.0",
            "tables": [
                {"name": "metric", "fields": [{"name": "value", "type": "float"}]}
            ]
        }"#,
    )
    .unwrap();
    let project = lower(&schema);
    let files = generate_files(&project);
    let repo = get_file(&files, "database/metric_repo.go");

    assert!(!repo.contains("params.Keyword"));
    assert!(repo.contains("func (r *MetricRepository) List"));
}

#[test]
fn test_handlers_wrap_repository_operations() {
    let project = shop_project();
    let files = generate_files(&project);
    let handler = get_file(&files, "handlers/product_handler.go");

    assert!(handler.contains("func NewProductHandler(db *gorm.DB) *ProductHandler {"));
    assert!(handler.contains("BadRequest(c, \"invalid payload: \"+err.Error())"));
    assert!(handler.contains("if errors.Is(err, database.ErrNotFound) {"));
    assert!(handler.contains("NotFound(c, \"product not found\")"));
    assert!(handler.contains("SuccessPage(c, entities, total, params.Page, params.PageSize)"));
    assert!(handler.contains("changes := req.Changes()"));
    // The handler never builds the column map itself.
    assert!(!handler.contains("map[string]any{"));
}

#[test]
fn test_router_registers_pluralized_routes() {
    let project = shop_project();
    let files = generate_files(&project);
    let router = get_file(&files, "router/router.go");

    assert!(router.contains("func Setup(db *gorm.DB) *gin.Engine {"));
    assert!(router.contains("productGroup := api.Group(\"/products\")"));
    assert!(router.contains("categoryGroup := api.Group(\"/categorys\")"));
    assert!(router.contains("productGroup.POST(\"\", productHandler.Create)"));
    assert!(router.contains("productGroup.POST(\"/batch-delete\", productHandler.BatchDelete)"));
    assert!(router.contains("r.GET(\"/health\""));
}

#[test]
fn test_no_global_database_handle_in_emitted_code() {
    let project = shop_project();
    let files = generate_files(&project);
    let database = get_file(&files, "database/database.go");

    assert!(database.contains("func Open(path string) (*gorm.DB, error) {"));
    assert!(!database.contains("var DB"));
    assert!(database.contains("&models.Product{},"));
    assert!(database.contains("&models.Category{},"));

    let main_go = get_file(&files, "main.go");
    assert!(main_go.contains("db, err := database.Open(*dbPath)"));
    assert!(main_go.contains("r := router.Setup(db)"));
}

#[test]
fn test_generate_writes_project_to_disk() {
    let project = shop_project();
    let temp = TempDir::new().unwrap();

    Generator::new(&project, "example-api")
        .generate(temp.path())
        .unwrap();

    for rel in [
        "go.mod",
        "models/product.go",
        "database/product_repo.go",
        "handlers/product_handler.go",
        "router/router.go",
        "main.go",
    ] {
        assert!(temp.path().join(rel).exists(), "missing {rel}");
    }

    // Scaffolded layer directories exist even when a stage emits nothing
    // else into them.
    assert!(temp.path().join("utils").is_dir());

    let written = std::fs::read_to_string(temp.path().join("go.mod")).unwrap();
    assert!(written.contains("module example-api"));
}
