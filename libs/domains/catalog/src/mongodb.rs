//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{PageRequest, PriceSort, Product, ProductFilter, ProductPage};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let indexes = vec![
            // Price sorts page through (price, _id)
            IndexModel::builder()
                .keys(doc! { "price": 1, "_id": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
            // Stock level queries
            IndexModel::builder()
                .keys(doc! { "stock": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_stock".to_string())
                        .build(),
                )
                .build(),
            // Category listings
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from a ProductFilter
    fn build_filter(filter: &ProductFilter) -> Document {
        match filter {
            ProductFilter::All => doc! {},
            ProductFilter::InStock => doc! { "stock": { "$gt": 0 } },
            ProductFilter::Text(pattern) => {
                // The pattern is untrusted input: escape it so regex
                // metacharacters match literally instead of as wildcards
                let literal = regex::escape(pattern);
                doc! {
                    "$or": vec![
                        doc! { "title": { "$regex": literal.clone(), "$options": "i" } },
                        doc! { "category": { "$regex": literal, "$options": "i" } },
                    ]
                }
            }
        }
    }

    /// Sort document for a price sort; `Unsorted` leaves the server's
    /// natural order, which MongoDB does not guarantee stable across calls
    fn sort_doc(sort: PriceSort) -> Option<Document> {
        match sort {
            PriceSort::Unsorted => None,
            // Ascending _id as tie-break keeps equal-price order stable
            PriceSort::Asc => Some(doc! { "price": 1, "_id": 1 }),
            PriceSort::Desc => Some(doc! { "price": -1, "_id": 1 }),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn paginate(
        &self,
        filter: ProductFilter,
        request: PageRequest,
    ) -> CatalogResult<ProductPage> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        // Full match count first; the page itself may well be empty
        let total_items = self
            .collection
            .count_documents(mongo_filter.clone())
            .await?;

        let builder = mongodb::options::FindOptions::builder()
            .limit(request.limit)
            .skip(request.offset());
        let options = match Self::sort_doc(request.sort) {
            Some(sort) => builder.sort(sort).build(),
            None => builder.build(),
        };

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let items: Vec<Product> = cursor.try_collect().await?;

        Ok(ProductPage::assemble(items, total_items, &request))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: ProductFilter) -> CatalogResult<u64> {
        let mongo_filter = Self::build_filter(&filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_all_is_empty() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::All);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_in_stock() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::InStock);
        let stock = doc.get_document("stock").unwrap();
        assert_eq!(stock.get_i32("$gt").unwrap(), 0);
    }

    #[test]
    fn test_build_filter_text_searches_title_and_category() {
        let doc =
            MongoProductRepository::build_filter(&ProductFilter::Text("shirt".to_string()));
        let clauses = doc.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 2);

        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "shirt");
        assert_eq!(title.get_str("$options").unwrap(), "i");

        let category = clauses[1]
            .as_document()
            .unwrap()
            .get_document("category")
            .unwrap();
        assert_eq!(category.get_str("$regex").unwrap(), "shirt");
    }

    #[test]
    fn test_build_filter_text_escapes_metacharacters() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::Text(".*".to_string()));
        let clauses = doc.get_array("$or").unwrap();
        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();

        // Escaped: matches the literal ".*", not everything
        assert_eq!(title.get_str("$regex").unwrap(), r"\.\*");
    }

    #[test]
    fn test_sort_doc() {
        assert!(MongoProductRepository::sort_doc(PriceSort::Unsorted).is_none());

        let asc = MongoProductRepository::sort_doc(PriceSort::Asc).unwrap();
        assert_eq!(asc.get_i32("price").unwrap(), 1);
        assert_eq!(asc.get_i32("_id").unwrap(), 1);

        let desc = MongoProductRepository::sort_doc(PriceSort::Desc).unwrap();
        assert_eq!(desc.get_i32("price").unwrap(), -1);
        assert_eq!(desc.get_i32("_id").unwrap(), 1);
    }
}
