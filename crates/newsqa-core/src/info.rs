//! Dataset metadata: description, provenance, and acquisition instructions.

use serde::Serialize;

use crate::schema::Schema;
use crate::variant::Variant;

pub const NAME: &str = "newsqa";

pub const DESCRIPTION: &str = "NewsQA is a challenging machine comprehension dataset of over \
100,000 human-generated question-answer pairs. Crowdworkers supply questions and answers based \
on a set of over 10,000 news articles from CNN, with answers consisting of spans of text from \
the corresponding articles.";

pub const HOMEPAGE: &str = "https://www.microsoft.com/en-us/research/project/newsqa-dataset/";

pub const CITATION: &str = r#"@inproceedings{trischler2017newsqa,
  title={NewsQA: A Machine Comprehension Dataset},
  author={Trischler, Adam and Wang, Tong and Yuan, Xingdi and Harris, Justin and Sordoni, Alessandro and Bachman, Philip and Suleman, Kaheer},
  booktitle={Proceedings of the 2nd Workshop on Representation Learning for NLP},
  pages={191--200},
  year={2017}
}
"#;

pub const LICENSE: &str = "NewsQA Code. Copyright (c) Microsoft Corporation. All rights reserved. \
MIT License. Permission is hereby granted, free of charge, to any person obtaining a copy of this \
software and associated documentation files (the \"Software\"), to deal in the Software without \
restriction, including without limitation the rights to use, copy, modify, merge, publish, \
distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the \
Software is furnished to do so, subject to the following conditions: The above copyright notice \
and this permission notice shall be included in all copies or substantial portions of the \
Software. THE SOFTWARE IS PROVIDED *AS IS*, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, \
INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE \
AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, \
DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, \
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.";

/// The corpus can't be redistributed, so it is never fetched; users assemble it by hand.
pub const MANUAL_DOWNLOAD_INSTRUCTIONS: &str = "\
Due to legal restrictions with the CNN data and data extraction, the data has to be downloaded \
from several sources and compiled as per the instructions by the authors.
Please refer to https://github.com/Maluuba/newsqa to download data from the Microsoft Research \
site (https://msropendata.com/datasets/939b1042-6402-4697-9c15-7a28de7e1321) and a CNN \
datasource (https://cs.nyu.edu/~kcho/DMQA/) and run the scripts present there.
This will generate a folder named \"split_data\" and the files \"combined-newsqa-data-v1.csv\" \
and \"combined-newsqa-data-v1.json\".
Copy the folder and the files to a directory of your choice and pass it as the data directory.";

/// Everything a consumer needs to describe one variant of the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub name: &'static str,
    pub config_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub config_description: &'static str,
    pub homepage: &'static str,
    pub citation: &'static str,
    pub license: &'static str,
    pub partitions: Vec<&'static str>,
    pub schema: Schema,
}

impl DatasetInfo {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            name: NAME,
            config_name: variant.config_name(),
            version: crate::VERSION,
            description: DESCRIPTION,
            config_description: variant.description(),
            homepage: HOMEPAGE,
            citation: CITATION,
            license: LICENSE,
            partitions: variant.partitions().iter().map(|p| p.name()).collect(),
            schema: variant.schema(),
        }
    }
}
